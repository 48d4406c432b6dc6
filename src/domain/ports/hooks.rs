//! Hook ports - user-supplied callbacks around the workflow
//!
//! `before_start` runs once selections are final; `after_build` receives the
//! extracted tags together with bound encoders so it can re-emit them.

use thiserror::Error;

use super::command_runner::CommandError;
use crate::domain::services::EnvMap;
use crate::domain::value_objects::{BodyTags, HeadTags, RunContext};
use crate::html::TagCodec;

/// Everything `after_build` gets besides the run context
#[derive(Debug, Clone, Copy)]
pub struct AfterBuildPayload<'a> {
    pub head: &'a HeadTags,
    pub body: &'a BodyTags,
    /// Raw HTML of the build artifact
    pub html: &'a str,
    pub env: &'a EnvMap,
    /// `create_link` / `create_script` / `create_style` / `create_meta`
    pub codec: TagCodec,
}

#[derive(Debug, Error)]
pub enum HookError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("failed to encode hook payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("{0}")]
    Failed(String),
}

pub trait BeforeStartHook {
    fn on_before_start(&self, ctx: &RunContext, env: &EnvMap) -> Result<(), HookError>;
}

pub trait AfterBuildHook {
    fn on_after_build(&self, ctx: &RunContext, payload: &AfterBuildPayload<'_>)
        -> Result<(), HookError>;
}

/// The configured hooks of a session; either may be absent
#[derive(Default)]
pub struct Hooks {
    pub before_start: Option<Box<dyn BeforeStartHook>>,
    pub after_build: Option<Box<dyn AfterBuildHook>>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_before_start(mut self, hook: impl BeforeStartHook + 'static) -> Self {
        self.before_start = Some(Box::new(hook));
        self
    }

    pub fn with_after_build(mut self, hook: impl AfterBuildHook + 'static) -> Self {
        self.after_build = Some(Box::new(hook));
        self
    }
}

impl std::fmt::Debug for Hooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hooks")
            .field("before_start", &self.before_start.is_some())
            .field("after_build", &self.after_build.is_some())
            .finish()
    }
}
