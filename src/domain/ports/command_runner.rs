//! CommandRunner port - run a command string as a subprocess
//!
//! Commands receive the resolved [`EnvMap`] explicitly instead of reading
//! it from the process environment.

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::domain::services::EnvMap;

/// Everything needed to run one command
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec<'a> {
    pub command: &'a str,
    pub env: &'a EnvMap,
    pub cwd: &'a Path,
    /// Bytes piped to the child's stdin (hooks use this for JSON payloads)
    pub stdin: Option<&'a [u8]>,
}

impl<'a> CommandSpec<'a> {
    pub fn new(command: &'a str, env: &'a EnvMap, cwd: &'a Path) -> Self {
        Self {
            command,
            env,
            cwd,
            stdin: None,
        }
    }

    pub fn with_stdin(mut self, stdin: &'a [u8]) -> Self {
        self.stdin = Some(stdin);
        self
    }
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to start '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("'{command}' exited with {}", describe_code(.code))]
    Failed { command: String, code: Option<i32> },

    #[error("failed to write stdin of '{command}': {source}")]
    Stdin {
        command: String,
        #[source]
        source: io::Error,
    },
}

impl CommandError {
    /// The child was killed by a signal (Ctrl-C reaches it too)
    pub fn terminated_by_signal(&self) -> bool {
        matches!(self, Self::Failed { code: None, .. })
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// Subprocess execution capability
///
/// Output goes straight to the console; only success or failure comes back.
pub trait CommandRunner {
    fn run(&self, spec: &CommandSpec<'_>) -> Result<(), CommandError>;
}
