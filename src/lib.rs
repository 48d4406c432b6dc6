//! one-start - interactive build and deploy launcher
//!
//! Asks for a host, a stage environment and any configured options, resolves
//! the stage's environment variables and then starts the dev server, builds,
//! uploads, or extracts asset tags from the built HTML for an `after_build`
//! hook.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod html;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{Session, SessionOutcome, Workflow};
pub use config::{BuildFailurePolicy, Config, OptionSpec, StageConfig, CONFIG_FILE_NAME};
pub use domain::ports::{
    AfterBuildHook, AfterBuildPayload, BeforeStartHook, Choice, CommandRunner, Hooks, Prompter,
};
pub use domain::services::{build_env, EnvMap, EnvSpec, EnvValue, Resolvable};
pub use domain::value_objects::{ContextValue, Extraction, Mode, RunContext, TagAttribute};
pub use error::{OneStartError, OneStartResult};
pub use html::{encode, extract, TagCodec};
