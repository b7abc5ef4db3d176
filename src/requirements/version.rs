//! Version parsing and requirement comparison.
//!
//! macOS publishes meaningful minor releases, so its check compares
//! `major.minor`. Xcode requirements are stated per major release, so
//! that check compares the major component only. The policy is chosen
//! per capability with [`VersionPolicy`] and never unified.

use std::fmt;

/// A `major.minor` version pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    /// Create a version from its components.
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parse `MAJOR.MINOR`, ignoring any further components.
    ///
    /// Both components must be present and numeric: `"15.0.1"` parses to
    /// `15.0`, while `"15"` and `"15.x"` do not parse.
    pub fn parse_major_minor(s: &str) -> Option<Self> {
        let mut parts = s.trim().split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;
        Some(Self::new(major, minor))
    }

    /// Parse the leading major component, ignoring the rest.
    ///
    /// `"16"`, `"16.0"` and `"16.beta"` all yield `16`.
    pub fn parse_major(s: &str) -> Option<u32> {
        s.trim().split('.').next()?.parse().ok()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// How a detected version is compared against a requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionPolicy {
    /// `major > req.major || (major == req.major && minor >= req.minor)`
    MajorMinor,
    /// `major >= req.major`; the minor component is ignored.
    MajorOnly,
}

impl VersionPolicy {
    /// Whether `detected` satisfies `required` under this policy.
    pub fn satisfies(self, detected: Version, required: Version) -> bool {
        match self {
            VersionPolicy::MajorMinor => meets_major_minor(detected, required),
            VersionPolicy::MajorOnly => meets_major(detected.major, required),
        }
    }
}

/// Compare on major, then minor.
pub fn meets_major_minor(detected: Version, required: Version) -> bool {
    detected.major > required.major
        || (detected.major == required.major && detected.minor >= required.minor)
}

/// Compare on major only.
pub fn meets_major(detected_major: u32, required: Version) -> bool {
    detected_major >= required.major
}

/// `meets` or `does not meet`, for result messages.
pub(crate) fn verdict_word(passed: bool) -> &'static str {
    if passed {
        "meets"
    } else {
        "does not meet"
    }
}
