//! Configuration module for one-start
//!
//! The config file `one-start.toml` lives in the project root. Strings may
//! contain `{key}` placeholders, which become values computed from the run
//! context; `${VAR}` is left for the shell.

mod loader;
mod types;

pub use loader::{load_with_warnings, ConfigWarning, WarningKind, CONFIG_FILE_NAME};
pub use types::{BuildFailurePolicy, Config, HookCommands, OptionSpec, StageConfig};
