//! Error types for one-start
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for one-start operations
pub type OneStartResult<T> = Result<T, OneStartError>;

/// Main error type for one-start operations
#[derive(Error, Debug)]
pub enum OneStartError {
    /// Config file does not exist
    #[error("config file is required: create '{}' in your project root directory", .path.display())]
    ConfigNotFound { path: PathBuf },

    /// Config file could not be parsed
    #[error("invalid config in {}: {message}", .file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// A required key is missing from the config
    #[error("missing required config key '{key}' in {}", .file.display())]
    MissingConfigKey { key: String, file: PathBuf },

    /// An option re-uses a key written by another selection step
    #[error("option name '{name}' is reserved (host, stage and mode are set by one-start)")]
    ReservedOptionName { name: String },

    /// Two options share the same name
    #[error("option '{name}' is declared more than once")]
    DuplicateOption { name: String },

    /// An option has nothing to choose from
    #[error("option '{name}' has no choices")]
    EmptyOptionChoices { name: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A prompt could not be shown or answered
    #[error(transparent)]
    Prompt(#[from] crate::domain::ports::PromptError),

    /// The build command failed and the config asks to stop
    #[error("build failed: {0}")]
    BuildAborted(String),

    /// Ctrl-C, or a command killed by a signal
    #[error("interrupted")]
    Interrupted,
}
