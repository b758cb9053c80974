//! External ssh client invocation.
//!
//! The ssh client owns the terminal while it runs; this module only builds the
//! argument vector and hands it to a [`ProcessRunner`]. The production runner
//! goes through `sh -c`, so the remote command of `sw run` gets full shell
//! semantics (word splitting, expansion) exactly as typed.

use crate::error::{Result, SwError};
use std::process::Command;

/// The ssh call to make: a program plus its arguments, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshInvocation {
    pub program: String,
    pub args: Vec<String>,
}

impl SshInvocation {
    /// `ssh ADDR`
    pub fn connect(program: &str, address: &str) -> Self {
        Self {
            program: program.to_string(),
            args: vec![address.to_string()],
        }
    }

    /// `ssh -t ADDR COMMAND`, with a forced pseudo-terminal for the remote command.
    pub fn run(program: &str, address: &str, command: &str) -> Self {
        Self {
            program: program.to_string(),
            args: vec!["-t".to_string(), address.to_string(), command.to_string()],
        }
    }

    /// The line handed to the shell. Arguments are joined unescaped.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Runs an [`SshInvocation`] to completion and reports its exit code
/// (`None` when the process was killed by a signal).
pub trait ProcessRunner {
    fn run(&mut self, invocation: &SshInvocation) -> Result<Option<i32>>;
}

/// Runs the invocation through `sh -c`, inheriting stdin/stdout/stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellRunner;

impl ProcessRunner for ShellRunner {
    fn run(&mut self, invocation: &SshInvocation) -> Result<Option<i32>> {
        let line = invocation.command_line();
        tracing::debug!("running: {}", line);

        let status = Command::new("sh")
            .arg("-c")
            .arg(&line)
            .status()
            .map_err(|e| SwError::Process(format!("failed to start `{}`: {}", line, e)))?;

        if !status.success() {
            tracing::info!("`{}` exited with {}", line, status);
        }
        Ok(status.code())
    }
}

/// Records every invocation instead of running it.
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Default)]
pub struct RecordingRunner {
    pub invocations: Vec<SshInvocation>,
    pub exit_code: i32,
}

#[cfg(any(test, feature = "test_utils"))]
impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exiting_with(exit_code: i32) -> Self {
        Self {
            invocations: Vec::new(),
            exit_code,
        }
    }
}

#[cfg(any(test, feature = "test_utils"))]
impl ProcessRunner for RecordingRunner {
    fn run(&mut self, invocation: &SshInvocation) -> Result<Option<i32>> {
        self.invocations.push(invocation.clone());
        Ok(Some(self.exit_code))
    }
}
