//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;

use crate::output::OutputFormat;

/// Validate that this Mac is ready for GPU programming.
///
/// Checks for macOS 15.0 or later, Xcode 16 or later, and an installed
/// Metal toolchain. Exits 0 when every check passes and 1 otherwise.
#[derive(Debug, Parser)]
#[command(name = "envcheck")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
Testing:
  MOCK_MACOS_VERSION=15.0 envcheck
  MOCK_XCODE_VERSION=16.0 envcheck
  MOCK_METAL_AVAILABLE=true envcheck")]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// No output, only exit code (0 = pass, 1 = fail)
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging (to stderr)
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// The output mode selected by the flags.
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_flags(self.json, self.quiet)
    }
}
