//! Scripted command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] without spawning processes.
//! Responses are registered per program name, and every invocation is
//! recorded for later assertion. Unscripted programs behave as if they
//! were not installed.
//!
//! # Example
//!
//! ```
//! use envcheck::shell::{CommandRunner, MockRunner, ProbeCommand};
//! use std::time::Duration;
//!
//! let runner = MockRunner::new();
//! runner.respond_stdout("sw_vers", "15.1\n");
//!
//! let cmd = ProbeCommand::new("sw_vers", &["-productVersion"], Duration::from_secs(5));
//! let output = runner.run(&cmd).unwrap();
//! assert_eq!(output.stdout, "15.1\n");
//! assert_eq!(runner.invocations(), vec!["sw_vers -productVersion".to_string()]);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{EnvCheckError, Result};

use super::{CommandRunner, ProbeCommand, ProbeOutput};

/// A scripted outcome for one program.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// The program ran and produced this output.
    Output(ProbeOutput),
    /// The program is not installed.
    NotFound,
    /// The program overran its time budget.
    Timeout,
    /// Starting the program failed for some other reason.
    SpawnError(String),
}

/// Command runner that replays scripted responses.
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: RefCell<HashMap<String, MockResponse>>,
    invocations: RefCell<Vec<String>>,
}

impl MockRunner {
    /// Create a runner with no scripted programs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the response for `program`.
    pub fn respond(&self, program: &str, response: MockResponse) {
        self.responses
            .borrow_mut()
            .insert(program.to_string(), response);
    }

    /// Script a successful run printing `stdout`.
    pub fn respond_stdout(&self, program: &str, stdout: &str) {
        self.respond(
            program,
            MockResponse::Output(ProbeOutput {
                exit_code: Some(0),
                stdout: stdout.to_string(),
                stderr: String::new(),
            }),
        );
    }

    /// Script a run exiting with `code` and printing `stderr`.
    pub fn respond_exit(&self, program: &str, code: i32, stderr: &str) {
        self.respond(
            program,
            MockResponse::Output(ProbeOutput {
                exit_code: Some(code),
                stdout: String::new(),
                stderr: stderr.to_string(),
            }),
        );
    }

    /// Command lines run so far, in order.
    pub fn invocations(&self) -> Vec<String> {
        self.invocations.borrow().clone()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, command: &ProbeCommand) -> Result<ProbeOutput> {
        self.invocations.borrow_mut().push(command.display());

        let response = self.responses.borrow().get(&command.program).cloned();
        match response.unwrap_or(MockResponse::NotFound) {
            MockResponse::Output(output) => Ok(output),
            MockResponse::NotFound => Err(EnvCheckError::CommandNotFound {
                program: command.program.clone(),
            }),
            MockResponse::Timeout => Err(EnvCheckError::CommandTimeout {
                program: command.program.clone(),
                timeout: command.timeout,
            }),
            MockResponse::SpawnError(message) => Err(EnvCheckError::Io(std::io::Error::other(
                message,
            ))),
        }
    }
}
