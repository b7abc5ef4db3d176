//! macOS version check.
//!
//! Reads the product version with `sw_vers -productVersion` and compares
//! it on major and minor against the configured requirement.

use std::rc::Rc;
use std::sync::LazyLock;

use regex::Regex;

use super::probe::{CapabilityProbe, Platform};
use super::status::CheckResult;
use super::version::{verdict_word, Version, VersionPolicy};
use crate::config::SW_VERS_TIMEOUT;
use crate::error::{EnvCheckError, Result};
use crate::shell::{CommandRunner, ProbeCommand};

/// Result name for this check.
pub const MACOS_CHECK_NAME: &str = "macOS Version";

/// Leading `MAJOR.MINOR` of `sw_vers` output (`15.0`, `15.0.1`, `14.5`).
static PRODUCT_VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\.(\d+)").expect("PRODUCT_VERSION_REGEX must compile")
});

/// Checks that macOS meets the minimum version.
pub struct MacOsVersionProbe {
    required: Version,
    mock: Option<String>,
    runner: Rc<dyn CommandRunner>,
    platform: Platform,
}

impl MacOsVersionProbe {
    /// Create the probe for the current platform.
    pub fn new(required: Version, mock: Option<String>, runner: Rc<dyn CommandRunner>) -> Self {
        Self {
            required,
            mock,
            runner,
            platform: Platform::current(),
        }
    }

    /// Pretend to run on `platform`.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    fn mocked(&self) -> Option<CheckResult> {
        let raw = self.mock.as_deref()?;
        let Some(detected) = Version::parse_major_minor(raw) else {
            tracing::debug!("Ignoring malformed macOS version override {:?}", raw);
            return None;
        };
        tracing::debug!("Using mocked macOS version {}", detected);
        Some(self.evaluate(detected))
    }

    fn evaluate(&self, detected: Version) -> CheckResult {
        let passed = VersionPolicy::MajorMinor.satisfies(detected, self.required);
        CheckResult::from_verdict(
            MACOS_CHECK_NAME,
            passed,
            Some(detected.to_string()),
            format!(
                "macOS {} {} requirement (>= {})",
                detected,
                verdict_word(passed),
                self.required
            ),
            || format!("Upgrade to macOS {} or later", self.required),
        )
    }

    fn probe_host(&self) -> Result<CheckResult> {
        if !self.platform.is_macos() {
            return Ok(CheckResult::fail(
                MACOS_CHECK_NAME,
                "Not running on macOS",
                Some("This check is only applicable on macOS systems".to_string()),
            ));
        }

        let command = ProbeCommand::new("sw_vers", &["-productVersion"], SW_VERS_TIMEOUT);
        let output = match self.runner.run(&command) {
            Ok(output) if output.success() => output,
            Ok(_)
            | Err(EnvCheckError::CommandNotFound { .. })
            | Err(EnvCheckError::CommandTimeout { .. }) => {
                return Ok(CheckResult::fail(
                    MACOS_CHECK_NAME,
                    "Failed to detect macOS version",
                    Some("Ensure sw_vers command is available".to_string()),
                ));
            }
            Err(e) => return Err(e),
        };

        let raw = output.stdout.trim();
        match parse_product_version(raw) {
            Some(detected) => Ok(self.evaluate(detected)),
            None => Ok(CheckResult::fail(
                MACOS_CHECK_NAME,
                format!("Could not parse macOS version: {}", raw),
                None,
            )),
        }
    }
}

impl CapabilityProbe for MacOsVersionProbe {
    fn name(&self) -> &str {
        MACOS_CHECK_NAME
    }

    fn probe(&self) -> CheckResult {
        if let Some(result) = self.mocked() {
            return result;
        }
        self.probe_host().unwrap_or_else(|e| {
            CheckResult::fail(
                MACOS_CHECK_NAME,
                format!("Error checking macOS version: {}", e),
                None,
            )
        })
    }
}

/// Extract `MAJOR.MINOR` from the start of `sw_vers` output.
fn parse_product_version(output: &str) -> Option<Version> {
    let caps = PRODUCT_VERSION_REGEX.captures(output)?;
    let major = caps[1].parse().ok()?;
    let minor = caps[2].parse().ok()?;
    Some(Version::new(major, minor))
}
