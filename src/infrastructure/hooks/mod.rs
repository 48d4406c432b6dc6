//! Hooks configured as shell commands

mod command;

pub use command::{hooks_from_config, CommandHook};
