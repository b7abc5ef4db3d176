//! Check result types.
//!
//! Each capability check produces exactly one [`CheckResult`]. Results are
//! built through constructors that keep the remediation consistent with
//! the verdict: a passing result never carries a fix.

use serde::Serialize;

/// The outcome of checking a single capability.
///
/// Serializes with every field present; absent optionals become `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    name: String,
    passed: bool,
    version: Option<String>,
    message: String,
    fix_command: Option<String>,
}

impl CheckResult {
    /// A passing result.
    pub fn pass(name: impl Into<String>, version: Option<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            version,
            message: message.into(),
            fix_command: None,
        }
    }

    /// A failing result with an optional remediation.
    pub fn fail(
        name: impl Into<String>,
        message: impl Into<String>,
        fix_command: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            passed: false,
            version: None,
            message: message.into(),
            fix_command,
        }
    }

    /// A result whose verdict was computed elsewhere.
    ///
    /// `fix_command` is only kept when `passed` is false.
    pub fn from_verdict(
        name: impl Into<String>,
        passed: bool,
        version: Option<String>,
        message: impl Into<String>,
        fix_command: impl FnOnce() -> String,
    ) -> Self {
        Self {
            name: name.into(),
            passed,
            version,
            message: message.into(),
            fix_command: (!passed).then(fix_command),
        }
    }

    /// Attach the detected version to a result.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Human-readable name of the capability checked.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the capability is satisfied.
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Detected version, if one was determined.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Explanation of the outcome.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Suggested remediation; only ever set on failure.
    pub fn fix_command(&self) -> Option<&str> {
        self.fix_command.as_deref()
    }
}
