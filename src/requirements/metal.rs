//! Metal toolchain availability check.
//!
//! `xcrun -sdk macosx metal` has no structured output. Run without input
//! files, a working compiler complains about missing input and exits
//! non-zero; a missing toolchain makes `xcrun` refuse to execute the tool.
//! The check classifies those two markers in the combined output and
//! ignores the exit status.

use std::rc::Rc;
use std::sync::LazyLock;

use regex::Regex;

use super::probe::CapabilityProbe;
use super::status::CheckResult;
use crate::config::XCRUN_TIMEOUT;
use crate::error::{EnvCheckError, Result};
use crate::shell::{CommandRunner, ProbeCommand};

/// Result name for this check.
pub const METAL_CHECK_NAME: &str = "Metal Toolchain";

/// Command that downloads the Metal toolchain component.
pub const METAL_DOWNLOAD_COMMAND: &str = "xcodebuild -downloadComponent MetalToolchain";

/// Marker for a toolchain that is not installed (matched lower-cased).
const MISSING_MARKER: &str = "cannot execute tool 'metal'";

/// Marker for a working compiler invoked without input (matched lower-cased).
const AVAILABLE_MARKER: &str = "no input files";

static METAL_VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"metal version (\S+)").expect("METAL_VERSION_REGEX must compile")
});

/// Parse an availability override.
///
/// Accepts `true`/`1`/`yes` and `false`/`0`/`no`, case-insensitively.
pub fn parse_availability(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Checks that the Metal toolchain is installed.
pub struct MetalToolchainProbe {
    mock: Option<String>,
    runner: Rc<dyn CommandRunner>,
}

impl MetalToolchainProbe {
    pub fn new(mock: Option<String>, runner: Rc<dyn CommandRunner>) -> Self {
        Self { mock, runner }
    }

    fn mocked(&self) -> Option<CheckResult> {
        let raw = self.mock.as_deref()?;
        let Some(available) = parse_availability(raw) else {
            tracing::debug!("Ignoring malformed Metal availability override {:?}", raw);
            return None;
        };
        tracing::debug!("Using mocked Metal availability {}", available);
        Some(CheckResult::from_verdict(
            METAL_CHECK_NAME,
            available,
            None,
            format!(
                "Metal toolchain is {} (mocked)",
                if available { "available" } else { "not available" }
            ),
            download_fix,
        ))
    }

    fn probe_host(&self) -> Result<CheckResult> {
        let command = ProbeCommand::new("xcrun", &["-sdk", "macosx", "metal"], XCRUN_TIMEOUT);
        let output = match self.runner.run(&command) {
            Ok(output) => output,
            Err(EnvCheckError::CommandNotFound { .. }) => {
                return Ok(CheckResult::fail(
                    METAL_CHECK_NAME,
                    "xcrun command not found (Xcode Command Line Tools not installed)",
                    Some("Install Xcode Command Line Tools: xcode-select --install".to_string()),
                ));
            }
            Err(e) => return Err(e),
        };

        Ok(classify_output(&output.combined()))
    }
}

impl CapabilityProbe for MetalToolchainProbe {
    fn name(&self) -> &str {
        METAL_CHECK_NAME
    }

    fn probe(&self) -> CheckResult {
        if let Some(result) = self.mocked() {
            return result;
        }
        self.probe_host().unwrap_or_else(|e| {
            CheckResult::fail(
                METAL_CHECK_NAME,
                format!("Error checking Metal toolchain: {}", e),
                Some(download_fix()),
            )
        })
    }
}

fn download_fix() -> String {
    METAL_DOWNLOAD_COMMAND.to_string()
}

/// Classify combined `xcrun` output into a result.
fn classify_output(output: &str) -> CheckResult {
    let lowered = output.to_lowercase();

    if lowered.contains(MISSING_MARKER) {
        return CheckResult::fail(
            METAL_CHECK_NAME,
            "Metal toolchain not installed",
            Some(download_fix()),
        );
    }

    if lowered.contains(AVAILABLE_MARKER) {
        let version = METAL_VERSION_REGEX
            .captures(output)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string());
        let message = match &version {
            Some(v) => format!("Metal toolchain is available ({})", v),
            None => "Metal toolchain is available".to_string(),
        };
        return CheckResult::pass(METAL_CHECK_NAME, version, message);
    }

    CheckResult::fail(
        METAL_CHECK_NAME,
        format!("Unexpected Metal toolchain error: {}", output.trim()),
        Some(download_fix()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{MockResponse, MockRunner};

    fn probe_with(mock: Option<&str>, runner: &Rc<MockRunner>) -> MetalToolchainProbe {
        MetalToolchainProbe::new(mock.map(String::from), runner.clone())
    }

    #[test]
    fn parse_availability_accepts_known_words() {
        for raw in ["true", "TRUE", "1", "yes", " Yes "] {
            assert_eq!(parse_availability(raw), Some(true), "{raw}");
        }
        for raw in ["false", "0", "no", "No"] {
            assert_eq!(parse_availability(raw), Some(false), "{raw}");
        }
        for raw in ["", "maybe", "2", "on"] {
            assert_eq!(parse_availability(raw), None, "{raw}");
        }
    }

    #[test]
    fn mock_available_passes_and_is_tagged() {
        let runner = Rc::new(MockRunner::new());
        let result = probe_with(Some("true"), &runner).probe();

        assert!(result.passed());
        assert_eq!(result.message(), "Metal toolchain is available (mocked)");
        assert!(result.version().is_none());
        assert!(result.fix_command().is_none());
        assert!(runner.invocations().is_empty());
    }

    #[test]
    fn mock_unavailable_fails_with_download_fix() {
        let runner = Rc::new(MockRunner::new());
        let result = probe_with(Some("false"), &runner).probe();

        assert!(!result.passed());
        assert_eq!(result.message(), "Metal toolchain is not available (mocked)");
        assert_eq!(result.fix_command(), Some(METAL_DOWNLOAD_COMMAND));
    }

    #[test]
    fn malformed_mock_falls_through_to_host() {
        let runner = Rc::new(MockRunner::new());
        runner.respond_exit("xcrun", 1, "metal: error: no input files\n");

        let result = probe_with(Some("perhaps"), &runner).probe();

        assert!(result.passed());
        assert!(!result.message().contains("mocked"));
        assert_eq!(runner.invocations(), vec!["xcrun -sdk macosx metal"]);
    }

    #[test]
    fn no_input_files_means_available_despite_exit_code() {
        let runner = Rc::new(MockRunner::new());
        runner.respond_exit("xcrun", 1, "metal: error: no input files\n");
        let result = probe_with(None, &runner).probe();

        assert!(result.passed());
        assert_eq!(result.message(), "Metal toolchain is available");
        assert!(result.version().is_none());
    }

    #[test]
    fn version_token_is_extracted_when_present() {
        let result = classify_output(
            "Apple metal version 32023.404 (metalfe-32023.404)\nmetal: error: no input files\n",
        );
        assert!(result.passed());
        assert_eq!(result.version(), Some("32023.404"));
        assert_eq!(result.message(), "Metal toolchain is available (32023.404)");
    }

    #[test]
    fn missing_tool_marker_fails() {
        let runner = Rc::new(MockRunner::new());
        runner.respond_exit(
            "xcrun",
            72,
            "error: error: cannot execute tool 'metal' due to missing Metal Toolchain; use: xcodebuild -downloadComponent MetalToolchain\n",
        );
        let result = probe_with(None, &runner).probe();

        assert!(!result.passed());
        assert_eq!(result.message(), "Metal toolchain not installed");
        assert_eq!(result.fix_command(), Some(METAL_DOWNLOAD_COMMAND));
    }

    #[test]
    fn markers_match_case_insensitively() {
        assert!(classify_output("Metal: error: No Input Files").passed());
        assert!(!classify_output("Cannot Execute Tool 'metal'").passed());
    }

    #[test]
    fn other_output_is_unexpected() {
        let result = classify_output("  xcrun: error: SDK \"macosx\" cannot be located\n");

        assert!(!result.passed());
        assert_eq!(
            result.message(),
            "Unexpected Metal toolchain error: xcrun: error: SDK \"macosx\" cannot be located"
        );
        assert_eq!(result.fix_command(), Some(METAL_DOWNLOAD_COMMAND));
    }

    #[test]
    fn missing_xcrun_points_at_command_line_tools() {
        let runner = Rc::new(MockRunner::new());
        let result = probe_with(None, &runner).probe();

        assert!(!result.passed());
        assert!(result.message().starts_with("xcrun command not found"));
        assert_eq!(
            result.fix_command(),
            Some("Install Xcode Command Line Tools: xcode-select --install")
        );
    }

    #[test]
    fn timeout_becomes_failed_result() {
        let runner = Rc::new(MockRunner::new());
        runner.respond("xcrun", MockResponse::Timeout);
        let result = probe_with(None, &runner).probe();

        assert!(!result.passed());
        assert!(result.message().starts_with("Error checking Metal toolchain:"));
        assert!(result.message().contains("timed out"));
        assert_eq!(result.fix_command(), Some(METAL_DOWNLOAD_COMMAND));
    }
}
