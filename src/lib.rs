//! envcheck - Host prerequisite validation for macOS GPU development.
//!
//! envcheck verifies that a Mac satisfies the prerequisites of a GPU
//! programming workflow before that workflow runs: a minimum macOS
//! version, a minimum Xcode version, and an installed Metal toolchain.
//! It only detects and reports; it never installs anything.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Minimum versions, time budgets, and mock overrides
//! - [`error`] - Error types and result aliases
//! - [`output`] - Summary, JSON, and quiet report formatters
//! - [`requirements`] - Capability probes and the check aggregator
//! - [`shell`] - External command execution
//!
//! # Example
//!
//! ```
//! use envcheck::config::{Overrides, Requirements};
//! use envcheck::requirements::CheckRunner;
//! use envcheck::shell::MockRunner;
//! use std::rc::Rc;
//!
//! let overrides = Overrides {
//!     macos_version: Some("15.0".into()),
//!     xcode_version: Some("16.0".into()),
//!     metal_available: Some("true".into()),
//! };
//! let report = CheckRunner::standard(Requirements::default(), overrides, Rc::new(MockRunner::new())).run();
//! assert!(report.all_passed());
//! assert_eq!(report.checks().len(), 3);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod requirements;
pub mod shell;

pub use error::{EnvCheckError, Result};
