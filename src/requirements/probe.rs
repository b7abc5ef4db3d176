//! The capability probe abstraction.
//!
//! Every check implements [`CapabilityProbe`]. A probe first consults its
//! override value; without one it runs a single external command through
//! a [`CommandRunner`](crate::shell::CommandRunner) and classifies the
//! output. Probing is total: whatever happens on the host, the caller gets
//! a [`CheckResult`] back.
//!
//! # Example
//!
//! ```
//! use envcheck::config::Overrides;
//! use envcheck::requirements::{CapabilityProbe, MetalToolchainProbe};
//! use envcheck::shell::MockRunner;
//! use std::rc::Rc;
//!
//! let probe = MetalToolchainProbe::new(Some("true".to_string()), Rc::new(MockRunner::new()));
//! let result = probe.probe();
//! assert!(result.passed());
//! assert!(result.message().contains("(mocked)"));
//! ```

use super::status::CheckResult;

/// A single capability check.
pub trait CapabilityProbe {
    /// Stable human-readable name, used as the result's name.
    fn name(&self) -> &str;

    /// Run the check once and report the outcome.
    ///
    /// Never panics and never returns an error; failures of any kind are
    /// reported as a failed [`CheckResult`].
    fn probe(&self) -> CheckResult;
}

/// Operating system the checks run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOS,
    Linux,
    Windows,
}

impl Platform {
    /// Detect the current platform.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOS
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }

    /// Whether this is macOS.
    pub fn is_macos(self) -> bool {
        self == Platform::MacOS
    }
}
