//! Configuration type definitions
//!
//! `Raw*` types mirror the TOML file. [`Config`] is the resolved model the
//! session works with; it can also be built in code with closures.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::ports::Choice;
use crate::domain::services::{EnvSpec, EnvValue, Resolvable};
use crate::error::OneStartResult;

use super::loader::{self, ConfigWarning};

/// What to do when the build command fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildFailurePolicy {
    /// Log the failure and keep going (upload/extract still run)
    #[default]
    Continue,
    /// Stop the run after a failed build
    Abort,
}

/// A named deployment environment
#[derive(Debug, Clone, Default)]
pub struct StageConfig {
    pub description: Option<String>,
    pub env: EnvSpec,
}

impl StageConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<Resolvable<EnvValue>>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }
}

/// A free-form prompt asked after host and stage
#[derive(Debug, Clone)]
pub struct OptionSpec {
    /// Key the answer is recorded under
    pub name: String,
    pub message: String,
    pub choices: Vec<Choice>,
    pub multiple: bool,
    pub initial: usize,
    /// Only ask on these stages (empty = always)
    pub stages: Vec<String>,
}

impl OptionSpec {
    pub fn new(name: impl Into<String>, choices: Vec<Choice>) -> Self {
        let name = name.into();
        Self {
            message: name.clone(),
            name,
            choices,
            multiple: false,
            initial: 0,
            stages: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    pub fn only_on_stages<I, S>(mut self, stages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stages = stages.into_iter().map(Into::into).collect();
        self
    }

    /// Whether this option is asked on `stage`
    pub fn applies_to(&self, stage: Option<&str>) -> bool {
        match stage {
            Some(stage) if !self.stages.is_empty() => self.stages.iter().any(|s| s == stage),
            _ => true,
        }
    }
}

/// Shell commands used as hooks
#[derive(Debug, Clone, Default)]
pub struct HookCommands {
    pub before_start: Option<Resolvable<String>>,
    pub after_build: Option<Resolvable<String>>,
}

/// Resolved configuration for one session
#[derive(Debug, Clone)]
pub struct Config {
    pub dev_command: Resolvable<String>,
    pub build_command: Resolvable<String>,
    pub upload_command: Resolvable<Option<String>>,
    pub build_dir: Resolvable<Option<String>>,
    pub build_html: Resolvable<Option<String>>,
    pub hosts: Vec<Choice>,
    pub stages: IndexMap<String, StageConfig>,
    pub options: Vec<OptionSpec>,
    pub common_env: EnvSpec,
    /// Offer `start` in the mode menu, not only through the development stage
    pub start_in_mode_menu: bool,
    pub on_build_failure: BuildFailurePolicy,
    pub hooks: HookCommands,
}

impl Config {
    pub fn new(
        dev_command: impl Into<Resolvable<String>>,
        build_command: impl Into<Resolvable<String>>,
    ) -> Self {
        Self {
            dev_command: dev_command.into(),
            build_command: build_command.into(),
            upload_command: Resolvable::Literal(None),
            build_dir: Resolvable::Literal(None),
            build_html: Resolvable::Literal(None),
            hosts: Vec::new(),
            stages: IndexMap::new(),
            options: Vec::new(),
            common_env: EnvSpec::new(),
            start_in_mode_menu: false,
            on_build_failure: BuildFailurePolicy::default(),
            hooks: HookCommands::default(),
        }
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> OneStartResult<Self> {
        Ok(loader::load_with_warnings(path)?.0)
    }

    /// Load configuration and collect non-fatal warnings (unknown keys)
    pub fn load_with_warnings(path: &Path) -> OneStartResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Parse configuration from TOML text; `origin` is used in messages
    pub fn from_toml_str(content: &str, origin: &Path) -> OneStartResult<(Self, Vec<ConfigWarning>)> {
        loader::parse_with_warnings(content, origin)
    }

    /// Env layer of `stage`, if that stage is configured
    pub fn stage_env(&self, stage: Option<&str>) -> Option<&EnvSpec> {
        stage
            .and_then(|name| self.stages.get(name))
            .map(|stage| &stage.env)
    }

    pub fn with_upload_command(mut self, command: Resolvable<Option<String>>) -> Self {
        self.upload_command = command;
        self
    }

    pub fn with_build_dir(mut self, dir: Resolvable<Option<String>>) -> Self {
        self.build_dir = dir;
        self
    }

    pub fn with_build_html(mut self, html: Resolvable<Option<String>>) -> Self {
        self.build_html = html;
        self
    }

    pub fn with_host(mut self, host: Choice) -> Self {
        self.hosts.push(host);
        self
    }

    pub fn with_stage(mut self, name: impl Into<String>, stage: StageConfig) -> Self {
        self.stages.insert(name.into(), stage);
        self
    }

    pub fn with_option(mut self, option: OptionSpec) -> Self {
        self.options.push(option);
        self
    }

    pub fn with_common_env(mut self, key: impl Into<String>, value: impl Into<Resolvable<EnvValue>>) -> Self {
        self.common_env.insert(key.into(), value.into());
        self
    }

    pub fn with_build_failure_policy(mut self, policy: BuildFailurePolicy) -> Self {
        self.on_build_failure = policy;
        self
    }

    pub fn with_start_in_mode_menu(mut self, enabled: bool) -> Self {
        self.start_in_mode_menu = enabled;
        self
    }
}

// ----------------------------------------------------------------------------
// File schema
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawConfig {
    #[serde(default)]
    pub dev_command: Option<String>,
    #[serde(default)]
    pub build_command: Option<String>,
    #[serde(default)]
    pub upload_command: Option<String>,
    #[serde(default)]
    pub build_dir: Option<String>,
    #[serde(default)]
    pub build_html: Option<String>,
    #[serde(default)]
    pub start_in_mode_menu: bool,
    #[serde(default)]
    pub on_build_failure: BuildFailurePolicy,
    #[serde(default)]
    pub hosts: Vec<RawChoice>,
    #[serde(default)]
    pub hooks: RawHooks,
    #[serde(default)]
    pub common: RawCommon,
    #[serde(default)]
    pub stages: IndexMap<String, RawStage>,
    #[serde(default)]
    pub options: Vec<RawOption>,
}

/// `"name"` or `{ name = "...", message = "..." }`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawChoice {
    Name(String),
    Table {
        name: String,
        #[serde(default)]
        message: Option<String>,
    },
}

impl From<RawChoice> for Choice {
    fn from(raw: RawChoice) -> Self {
        match raw {
            RawChoice::Name(name) => Choice::new(name),
            RawChoice::Table { name, message } => Choice { name, message },
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawHooks {
    #[serde(default)]
    pub before_start: Option<String>,
    #[serde(default)]
    pub after_build: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawCommon {
    #[serde(default)]
    pub env: IndexMap<String, EnvValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawStage {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub env: IndexMap<String, EnvValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawOption {
    pub name: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub choices: Vec<RawChoice>,
    #[serde(default)]
    pub multiple: bool,
    #[serde(default)]
    pub initial: usize,
    #[serde(default)]
    pub stages: Vec<String>,
}
