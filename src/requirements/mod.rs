//! Capability checks and aggregation.
//!
//! This module decides whether the host meets each prerequisite and
//! combines the answers into one verdict.
//!
//! # Modules
//!
//! - [`version`] - Version parsing and the comparison policies
//! - [`status`] - The per-check [`CheckResult`]
//! - [`probe`] - The [`CapabilityProbe`] trait every check implements
//! - [`macos`], [`xcode`], [`metal`] - The concrete checks
//! - [`checker`] - The [`CheckRunner`] aggregator and [`CheckReport`]

pub mod checker;
pub mod macos;
pub mod metal;
pub mod probe;
pub mod status;
pub mod version;
pub mod xcode;

pub use checker::{CheckReport, CheckRunner};
pub use macos::{MacOsVersionProbe, MACOS_CHECK_NAME};
pub use metal::{MetalToolchainProbe, METAL_CHECK_NAME, METAL_DOWNLOAD_COMMAND};
pub use probe::{CapabilityProbe, Platform};
pub use status::CheckResult;
pub use version::{Version, VersionPolicy};
pub use xcode::{XcodeVersionProbe, XCODE_CHECK_NAME};
