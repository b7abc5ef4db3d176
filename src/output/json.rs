//! JSON output formatter.
//!
//! Formats check results as machine-readable JSON for tooling integration.
//! The shape is fixed: optional fields are written as `null`, never omitted.

use super::ReportFormatter;
use crate::requirements::CheckReport;
use std::io::Write;

/// Formats check results as JSON.
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &CheckReport, writer: &mut W) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, report).map_err(std::io::Error::other)?;
        writeln!(writer)?;
        Ok(())
    }
}
