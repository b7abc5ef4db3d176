//! Human-readable output formatter.
//!
//! Formats check results for terminal display with optional color support.

use super::ReportFormatter;
use crate::requirements::{CheckReport, CheckResult};
use console::Style;
use std::io::Write;

/// Title printed above the results.
const TITLE: &str = "macOS Environment Check";

/// Width of the horizontal rules.
const RULE_WIDTH: usize = 70;

/// Formats check results for human consumption.
pub struct HumanFormatter {
    success: Style,
    error: Style,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        let (success, error) = if use_color {
            (
                Style::new().green().force_styling(true),
                Style::new().red().force_styling(true),
            )
        } else {
            (Style::new(), Style::new())
        };
        Self { success, error }
    }

    fn paint(&self, passed: bool, text: &str) -> String {
        let style = if passed { &self.success } else { &self.error };
        style.apply_to(text).to_string()
    }

    fn status(&self, result: &CheckResult) -> String {
        let label = if result.passed() { "✓ PASS" } else { "✗ FAIL" };
        self.paint(result.passed(), label)
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, report: &CheckReport, writer: &mut W) -> std::io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(writer, "{}", TITLE)?;
        writeln!(writer, "{}", rule)?;
        writeln!(writer)?;

        for result in report.checks() {
            writeln!(writer, "{} {}", self.status(result), result.name())?;

            if let Some(version) = result.version() {
                writeln!(writer, "     Version: {}", version)?;
            }

            if !result.message().is_empty() {
                writeln!(writer, "     {}", result.message())?;
            }

            if !result.passed() {
                if let Some(fix) = result.fix_command() {
                    writeln!(writer, "     Fix: {}", fix)?;
                }
            }

            writeln!(writer)?;
        }

        writeln!(writer, "{}", rule)?;
        let banner = if report.all_passed() {
            "✓ All checks passed!"
        } else {
            "✗ Some checks failed. Please address the issues above."
        };
        writeln!(writer, "{}", self.paint(report.all_passed(), banner))?;
        writeln!(writer)?;

        Ok(())
    }
}
