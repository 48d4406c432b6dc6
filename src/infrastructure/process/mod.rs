//! Subprocess execution

mod shell;

pub use shell::ShellCommandRunner;
