//! Report formatters.
//!
//! This module provides formatters for a [`CheckReport`] in each output
//! mode (human-readable summary, JSON, quiet). Every formatter reads the
//! same report; none of them re-runs a probe or changes a verdict.

pub mod human;
pub mod json;
pub mod quiet;

use crate::requirements::CheckReport;
use std::io::Write;

/// Output mode for check results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Summary,
    Json,
    Quiet,
}

impl OutputFormat {
    /// Pick the mode from CLI flags. `--quiet` wins over `--json`.
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Summary
        }
    }
}

/// Trait for formatting check results.
pub trait ReportFormatter {
    /// Format the report to the given writer.
    fn format<W: Write>(&self, report: &CheckReport, writer: &mut W) -> std::io::Result<()>;
}

/// Render `report` in `format` to `writer`.
pub fn render<W: Write>(
    report: &CheckReport,
    format: OutputFormat,
    use_color: bool,
    writer: &mut W,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Summary => HumanFormatter::new(use_color).format(report, writer),
        OutputFormat::Json => JsonFormatter::new().format(report, writer),
        OutputFormat::Quiet => QuietFormatter.format(report, writer),
    }
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
pub use quiet::QuietFormatter;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::CheckResult;

    fn sample_report() -> CheckReport {
        CheckReport::new(vec![
            CheckResult::pass("macOS Version", Some("15.0".into()), "ok"),
            CheckResult::fail("Xcode Version", "too old", Some("upgrade".into())),
            CheckResult::pass("Metal Toolchain", None, "available"),
        ])
    }

    #[test]
    fn quiet_wins_over_json() {
        assert_eq!(OutputFormat::from_flags(true, true), OutputFormat::Quiet);
        assert_eq!(OutputFormat::from_flags(true, false), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flags(false, false), OutputFormat::Summary);
    }

    #[test]
    fn summary_and_json_agree_on_verdicts() {
        let report = sample_report();

        let mut json = Vec::new();
        render(&report, OutputFormat::Json, false, &mut json).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&json).unwrap();
        let json_verdicts: Vec<(String, bool)> = parsed["checks"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| {
                (
                    c["name"].as_str().unwrap().to_string(),
                    c["passed"].as_bool().unwrap(),
                )
            })
            .collect();

        let mut summary = Vec::new();
        render(&report, OutputFormat::Summary, false, &mut summary).unwrap();
        let summary = String::from_utf8(summary).unwrap();
        let summary_verdicts: Vec<(String, bool)> = summary
            .lines()
            .filter_map(|line| {
                line.strip_prefix("✓ PASS ")
                    .map(|name| (name.to_string(), true))
                    .or_else(|| line.strip_prefix("✗ FAIL ").map(|name| (name.to_string(), false)))
            })
            .collect();

        assert_eq!(json_verdicts, summary_verdicts);
        assert_eq!(parsed["all_passed"], false);
        assert!(summary.contains("Some checks failed"));
    }

    #[test]
    fn quiet_writes_nothing() {
        let mut output = Vec::new();
        render(&sample_report(), OutputFormat::Quiet, true, &mut output).unwrap();
        assert!(output.is_empty());
    }
}
