//! Command-line interface for envcheck.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and the command implementation.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`check`] - The check command that runs probes and renders the report

pub mod args;
pub mod check;

pub use args::Cli;
pub use check::{CheckCommand, CommandResult};
