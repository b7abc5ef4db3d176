//! External command execution for probes.
//!
//! Probes depend only on a program's exit status and its output text, so
//! the interface to the host is deliberately narrow: [`CommandRunner`]
//! takes a [`ProbeCommand`] and returns a [`ProbeOutput`]. Tests replace
//! [`SystemRunner`] with a scripted runner.

use crate::error::{EnvCheckError, Result};
use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

/// How often a running child is polled for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// A single external program invocation with a time budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeCommand {
    /// Program name, resolved through PATH.
    pub program: String,
    /// Arguments passed verbatim (no shell).
    pub args: Vec<String>,
    /// Maximum time to wait before the child is killed.
    pub timeout: Duration,
}

impl ProbeCommand {
    /// Create a command for `program` with the given arguments.
    pub fn new(program: impl Into<String>, args: &[&str], timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
            timeout,
        }
    }

    /// The command line as a user would type it.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Captured result of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,
}

impl ProbeOutput {
    /// Whether command succeeded (exit code 0).
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Standard output followed by standard error.
    pub fn combined(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }
}

/// Runs probe commands against the host.
pub trait CommandRunner {
    /// Run `command` to completion or until its timeout elapses.
    ///
    /// A non-zero exit is not an error; it is reported through
    /// [`ProbeOutput::exit_code`]. Errors are reserved for a program that
    /// cannot be started ([`EnvCheckError::CommandNotFound`],
    /// [`EnvCheckError::Io`]) or that overruns its budget
    /// ([`EnvCheckError::CommandTimeout`]).
    fn run(&self, command: &ProbeCommand) -> Result<ProbeOutput>;
}

/// Runs commands as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &ProbeCommand) -> Result<ProbeOutput> {
        let start = Instant::now();
        let deadline = start + command.timeout;

        let mut child = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    EnvCheckError::CommandNotFound {
                        program: command.program.clone(),
                    }
                } else {
                    EnvCheckError::Io(e)
                }
            })?;

        // Pipes are drained concurrently; a full pipe would stall the child.
        let stdout_rx = spawn_reader(child.stdout.take());
        let stderr_rx = spawn_reader(child.stderr.take());

        let exit_code = match wait_until(&mut child, deadline)? {
            Some(code) => code,
            None => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(timed_out(command, start));
            }
        };

        // A background descendant can hold the pipes open after the child exits.
        let stdout =
            collect_until(&stdout_rx, deadline).ok_or_else(|| timed_out(command, start))?;
        let stderr =
            collect_until(&stderr_rx, deadline).ok_or_else(|| timed_out(command, start))?;

        tracing::debug!(
            "'{}' exited with {:?} in {:?}",
            command.display(),
            exit_code,
            start.elapsed()
        );

        Ok(ProbeOutput {
            exit_code,
            stdout,
            stderr,
        })
    }
}

fn timed_out(command: &ProbeCommand, start: Instant) -> EnvCheckError {
    tracing::debug!(
        "'{}' timed out after {:?}",
        command.display(),
        start.elapsed()
    );
    EnvCheckError::CommandTimeout {
        program: command.program.clone(),
        timeout: command.timeout,
    }
}

/// Poll `child` until it exits or `deadline` passes.
///
/// Returns `Some(exit_code)` on exit and `None` on timeout.
fn wait_until(child: &mut Child, deadline: Instant) -> Result<Option<Option<i32>>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status.code()));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// Wait for a reader's captured text, giving up at `deadline`.
fn collect_until(rx: &Receiver<String>, deadline: Instant) -> Option<String> {
    let remaining = deadline.saturating_duration_since(Instant::now());
    match rx.recv_timeout(remaining) {
        Ok(text) => Some(text),
        Err(RecvTimeoutError::Timeout) => None,
        // Reader thread died without sending; treat as no output.
        Err(RecvTimeoutError::Disconnected) => Some(String::new()),
    }
}

fn spawn_reader<R>(pipe: Option<R>) -> Receiver<String>
where
    R: Read + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        let _ = tx.send(String::from_utf8_lossy(&buf).into_owned());
    });
    rx
}
