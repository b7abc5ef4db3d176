//! Xcode version check.
//!
//! Xcode requirements are stated per major release, so only the major
//! component of the detected version is compared.

use std::rc::Rc;
use std::sync::LazyLock;

use regex::Regex;

use super::probe::CapabilityProbe;
use super::status::CheckResult;
use super::version::{meets_major, verdict_word, Version};
use crate::config::XCODEBUILD_TIMEOUT;
use crate::error::{EnvCheckError, Result};
use crate::shell::{CommandRunner, ProbeCommand};

/// Result name for this check.
pub const XCODE_CHECK_NAME: &str = "Xcode Version";

/// Version token in `xcodebuild -version` output, e.g. `Xcode 16.0`.
static XCODE_VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Xcode\s+(\d+(?:\.\d+)?)").expect("XCODE_VERSION_REGEX must compile")
});

/// Checks that Xcode meets the minimum major version.
pub struct XcodeVersionProbe {
    required: Version,
    mock: Option<String>,
    runner: Rc<dyn CommandRunner>,
}

impl XcodeVersionProbe {
    pub fn new(required: Version, mock: Option<String>, runner: Rc<dyn CommandRunner>) -> Self {
        Self {
            required,
            mock,
            runner,
        }
    }

    fn mocked(&self) -> Option<CheckResult> {
        let raw = self.mock.as_deref()?;
        let Some(major) = Version::parse_major(raw) else {
            tracing::debug!("Ignoring malformed Xcode version override {:?}", raw);
            return None;
        };
        tracing::debug!("Using mocked Xcode version {}", raw);
        Some(self.evaluate(raw, major))
    }

    fn evaluate(&self, detected: &str, major: u32) -> CheckResult {
        let passed = meets_major(major, self.required);
        CheckResult::from_verdict(
            XCODE_CHECK_NAME,
            passed,
            Some(detected.to_string()),
            format!(
                "Xcode {} {} requirement (>= {})",
                detected,
                verdict_word(passed),
                self.required
            ),
            || {
                format!(
                    "Upgrade to Xcode {} or later from the App Store",
                    self.required
                )
            },
        )
    }

    fn install_hint(&self) -> String {
        format!(
            "Install Xcode {} or later from the App Store",
            self.required.major
        )
    }

    fn probe_host(&self) -> Result<CheckResult> {
        let command = ProbeCommand::new("xcodebuild", &["-version"], XCODEBUILD_TIMEOUT);
        let output = match self.runner.run(&command) {
            Ok(output) if output.success() => output,
            Ok(_) | Err(EnvCheckError::CommandTimeout { .. }) => {
                return Ok(CheckResult::fail(
                    XCODE_CHECK_NAME,
                    "Xcode not found or not properly installed",
                    Some(self.install_hint()),
                ));
            }
            Err(EnvCheckError::CommandNotFound { .. }) => {
                return Ok(CheckResult::fail(
                    XCODE_CHECK_NAME,
                    "xcodebuild command not found",
                    Some(self.install_hint()),
                ));
            }
            Err(e) => return Err(e),
        };

        let raw = output.stdout.trim();
        let Some(detected) = XCODE_VERSION_REGEX
            .captures(raw)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
        else {
            return Ok(CheckResult::fail(
                XCODE_CHECK_NAME,
                format!("Could not parse Xcode version from: {}", raw),
                None,
            ));
        };

        match Version::parse_major(detected) {
            Some(major) => Ok(self.evaluate(detected, major)),
            None => Err(anyhow::anyhow!("invalid Xcode major version '{}'", detected).into()),
        }
    }
}

impl CapabilityProbe for XcodeVersionProbe {
    fn name(&self) -> &str {
        XCODE_CHECK_NAME
    }

    fn probe(&self) -> CheckResult {
        if let Some(result) = self.mocked() {
            return result;
        }
        self.probe_host().unwrap_or_else(|e| {
            CheckResult::fail(
                XCODE_CHECK_NAME,
                format!("Error checking Xcode version: {}", e),
                None,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{MockResponse, MockRunner};

    const REQUIRED: Version = Version::new(16, 0);

    fn probe_with(mock: Option<&str>, runner: &Rc<MockRunner>) -> XcodeVersionProbe {
        XcodeVersionProbe::new(REQUIRED, mock.map(String::from), runner.clone())
    }

    #[test]
    fn mock_at_requirement_passes() {
        let runner = Rc::new(MockRunner::new());
        let result = probe_with(Some("16.0"), &runner).probe();

        assert!(result.passed());
        assert_eq!(result.version(), Some("16.0"));
        assert_eq!(result.message(), "Xcode 16.0 meets requirement (>= 16.0)");
        assert!(result.fix_command().is_none());
        assert!(runner.invocations().is_empty());
    }

    #[test]
    fn mock_below_requirement_fails() {
        let runner = Rc::new(MockRunner::new());
        let result = probe_with(Some("15.4"), &runner).probe();

        assert!(!result.passed());
        assert_eq!(
            result.message(),
            "Xcode 15.4 does not meet requirement (>= 16.0)"
        );
        assert_eq!(
            result.fix_command(),
            Some("Upgrade to Xcode 16.0 or later from the App Store")
        );
    }

    #[test]
    fn mock_major_only_is_accepted_verbatim() {
        let runner = Rc::new(MockRunner::new());
        let result = probe_with(Some("17"), &runner).probe();
        assert!(result.passed());
        assert_eq!(result.version(), Some("17"));
    }

    #[test]
    fn minor_is_ignored() {
        let runner = Rc::new(MockRunner::new());
        let result = XcodeVersionProbe::new(
            Version::new(16, 3),
            Some("16.0".into()),
            runner.clone(),
        )
        .probe();
        assert!(result.passed());
    }

    #[test]
    fn malformed_mock_falls_through_to_host() {
        let runner = Rc::new(MockRunner::new());
        runner.respond_stdout("xcodebuild", "Xcode 16.2\nBuild version 16C5032a\n");

        let result = probe_with(Some("latest"), &runner).probe();

        assert!(result.passed());
        assert_eq!(result.version(), Some("16.2"));
        assert_eq!(runner.invocations(), vec!["xcodebuild -version"]);
    }

    #[test]
    fn host_version_is_parsed_from_output() {
        let runner = Rc::new(MockRunner::new());
        runner.respond_stdout("xcodebuild", "Xcode 15.4\nBuild version 15F31d\n");
        let result = probe_with(None, &runner).probe();

        assert!(!result.passed());
        assert_eq!(result.version(), Some("15.4"));
        assert!(result.fix_command().unwrap().contains("Upgrade to Xcode"));
    }

    #[test]
    fn non_zero_exit_means_not_installed() {
        let runner = Rc::new(MockRunner::new());
        runner.respond_exit(
            "xcodebuild",
            1,
            "xcode-select: error: tool 'xcodebuild' requires Xcode",
        );
        let result = probe_with(None, &runner).probe();

        assert!(!result.passed());
        assert_eq!(
            result.message(),
            "Xcode not found or not properly installed"
        );
        assert_eq!(
            result.fix_command(),
            Some("Install Xcode 16 or later from the App Store")
        );
    }

    #[test]
    fn timeout_matches_non_zero_exit() {
        let runner = Rc::new(MockRunner::new());
        runner.respond("xcodebuild", MockResponse::Timeout);
        let result = probe_with(None, &runner).probe();
        assert_eq!(
            result.message(),
            "Xcode not found or not properly installed"
        );
    }

    #[test]
    fn missing_command_has_install_hint() {
        let runner = Rc::new(MockRunner::new());
        let result = probe_with(None, &runner).probe();

        assert!(!result.passed());
        assert_eq!(result.message(), "xcodebuild command not found");
        assert_eq!(
            result.fix_command(),
            Some("Install Xcode 16 or later from the App Store")
        );
    }

    #[test]
    fn unparseable_output_surfaces_raw_text() {
        let runner = Rc::new(MockRunner::new());
        runner.respond_stdout("xcodebuild", "Command Line Tools 16.0\n");
        let result = probe_with(None, &runner).probe();

        assert!(!result.passed());
        assert_eq!(
            result.message(),
            "Could not parse Xcode version from: Command Line Tools 16.0"
        );
        assert!(result.version().is_none());
        assert!(result.fix_command().is_none());
    }

    #[test]
    fn unexpected_error_becomes_failed_result() {
        let runner = Rc::new(MockRunner::new());
        runner.respond("xcodebuild", MockResponse::SpawnError("fork failed".into()));
        let result = probe_with(None, &runner).probe();

        assert!(!result.passed());
        assert!(result.message().starts_with("Error checking Xcode version:"));
        assert!(result.message().contains("fork failed"));
    }
}
