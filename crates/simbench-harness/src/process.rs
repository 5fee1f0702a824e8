use std::io;
use std::process::{Command, Stdio};

use serde::{Deserialize, Serialize};

use crate::command::CommandSpec;

/// Captured outcome of one child process run to completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutput {
    /// Exit code, `None` when the child was terminated by a signal.
    pub status: Option<i32>,
    /// Whether the child exited with status zero.
    pub success: bool,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

/// Synchronous boundary to the external build system and simulation binary.
///
/// The executor consumes the structured output; swapping the runner lets
/// tests inject scripted results without spawning real processes.
pub trait ProcessRunner {
    /// Runs the command to completion, capturing both output streams.
    ///
    /// Blocks until the child exits; there is no timeout, a hung child
    /// stalls the sweep.
    fn run(&self, spec: &CommandSpec) -> io::Result<ProcessOutput>;
}

/// Production runner backed by [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> io::Result<ProcessOutput> {
        let output = Command::new(&spec.program)
            .args(&spec.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;
        Ok(ProcessOutput {
            status: output.status.code(),
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
