//! Quiet output formatter.
//!
//! Writes nothing. The verdict is carried by the process exit status alone.

use super::ReportFormatter;
use crate::requirements::CheckReport;
use std::io::Write;

/// Formatter for `--quiet`.
pub struct QuietFormatter;

impl ReportFormatter for QuietFormatter {
    fn format<W: Write>(&self, _report: &CheckReport, _writer: &mut W) -> std::io::Result<()> {
        Ok(())
    }
}
