//! External command execution for host probes.

pub mod command;
pub mod mock;

pub use command::{CommandRunner, ProbeCommand, ProbeOutput, SystemRunner};
pub use mock::{MockResponse, MockRunner};
