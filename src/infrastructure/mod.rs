//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `prompt/` - Terminal menus (dialoguer)
//! - `process/` - Shell command execution
//! - `hooks/` - Hooks configured as shell commands
//! - `events/` - Workflow event rendering

pub mod events;
pub mod hooks;
pub mod process;
pub mod prompt;

// Re-export for convenience
pub use events::ConsoleEventSink;
pub use hooks::{hooks_from_config, CommandHook};
pub use process::ShellCommandRunner;
pub use prompt::DialoguerPrompter;
