//! Error types for envcheck operations.
//!
//! This module defines [`EnvCheckError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Probe failures never surface as `EnvCheckError` to the caller; each
//!   probe converts them into a failed [`CheckResult`](crate::requirements::CheckResult)
//! - Use `EnvCheckError` for the command-execution and rendering failures
//!   that need distinct handling inside a probe or in `main`
//! - Use `anyhow::Error` (via `EnvCheckError::Other`) for unexpected errors

use std::time::Duration;
use thiserror::Error;

/// Core error type for envcheck operations.
#[derive(Debug, Error)]
pub enum EnvCheckError {
    /// The probe program is not installed or not on PATH.
    #[error("Command not found: {program}")]
    CommandNotFound { program: String },

    /// The probe program did not exit within its time budget.
    #[error("Command timed out after {timeout:?}: {program}")]
    CommandTimeout { program: String, timeout: Duration },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for envcheck operations.
pub type Result<T> = std::result::Result<T, EnvCheckError>;
