//! Requirement configuration for envcheck.
//!
//! This module is the single place where project requirements live:
//! - Minimum versions in [`Requirements`]
//! - Per-probe time budgets
//! - Caller-supplied mock values in [`overrides`]
//!
//! Update the constants below when the project's prerequisites change.
//!
//! # Example
//!
//! ```
//! use envcheck::config::{Requirements, REQUIRED_MACOS_VERSION};
//!
//! let requirements = Requirements::default();
//! assert_eq!(requirements.macos, REQUIRED_MACOS_VERSION);
//! assert_eq!(requirements.xcode.to_string(), "16.0");
//! ```

pub mod overrides;

pub use overrides::{
    Overrides, MOCK_MACOS_VERSION_VAR, MOCK_METAL_AVAILABLE_VAR, MOCK_XCODE_VERSION_VAR,
};

use crate::requirements::version::Version;
use std::time::Duration;

/// Minimum macOS version for optimal compatibility.
pub const REQUIRED_MACOS_VERSION: Version = Version::new(15, 0);

/// Minimum Xcode version required.
pub const REQUIRED_XCODE_VERSION: Version = Version::new(16, 0);

/// Time budget for `sw_vers`.
pub const SW_VERS_TIMEOUT: Duration = Duration::from_secs(5);

/// Time budget for `xcodebuild -version`, which can be slow on first launch.
pub const XCODEBUILD_TIMEOUT: Duration = Duration::from_secs(10);

/// Time budget for `xcrun -sdk macosx metal`.
pub const XCRUN_TIMEOUT: Duration = Duration::from_secs(5);

/// Minimum versions each version-gated check compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirements {
    /// Minimum macOS version (compared on major and minor).
    pub macos: Version,
    /// Minimum Xcode version (compared on major only).
    pub xcode: Version,
}

impl Default for Requirements {
    fn default() -> Self {
        Self {
            macos: REQUIRED_MACOS_VERSION,
            xcode: REQUIRED_XCODE_VERSION,
        }
    }
}
