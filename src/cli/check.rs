//! The check command.
//!
//! Runs the standard check set once and renders the report in the
//! selected mode.

use std::io::Write;
use std::rc::Rc;

use crate::config::{Overrides, Requirements};
use crate::error::Result;
use crate::output::{render, OutputFormat};
use crate::requirements::CheckRunner;
use crate::shell::{CommandRunner, SystemRunner};

/// Result of command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether every check passed.
    pub success: bool,

    /// Exit code to use (0 for success, 1 for failure).
    pub exit_code: i32,
}

/// Runs the checks and writes the report.
pub struct CheckCommand {
    requirements: Requirements,
    overrides: Overrides,
    runner: Rc<dyn CommandRunner>,
    format: OutputFormat,
    use_color: bool,
}

impl CheckCommand {
    /// Create a command that probes the real host.
    pub fn new(overrides: Overrides, format: OutputFormat, use_color: bool) -> Self {
        Self::with_runner(overrides, format, use_color, Rc::new(SystemRunner))
    }

    /// Create a command with an injected command runner.
    pub fn with_runner(
        overrides: Overrides,
        format: OutputFormat,
        use_color: bool,
        runner: Rc<dyn CommandRunner>,
    ) -> Self {
        Self {
            requirements: Requirements::default(),
            overrides,
            runner,
            format,
            use_color,
        }
    }

    /// Use different minimum versions.
    pub fn with_requirements(mut self, requirements: Requirements) -> Self {
        self.requirements = requirements;
        self
    }

    /// Run the checks and write the report to `writer`.
    pub fn execute<W: Write>(&self, writer: &mut W) -> Result<CommandResult> {
        let report = CheckRunner::standard(
            self.requirements,
            self.overrides.clone(),
            Rc::clone(&self.runner),
        )
        .run();

        render(&report, self.format, self.use_color, writer)?;
        writer.flush()?;

        Ok(CommandResult {
            success: report.all_passed(),
            exit_code: report.exit_code(),
        })
    }
}
