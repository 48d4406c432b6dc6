//! Session Factory
//!
//! Wires the terminal, shell and console adapters into a session.
//! This is the dependency injection point for the application.

use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use crate::domain::ports::{CommandRunner, Hooks, WorkflowEventSink};
use crate::infrastructure::{
    hooks_from_config, ConsoleEventSink, DialoguerPrompter, ShellCommandRunner,
};
use crate::ui::context::UiContext;

/// Production adapters for one session
pub struct SessionPorts {
    pub runner: Arc<dyn CommandRunner>,
    pub hooks: Hooks,
    pub events: Arc<dyn WorkflowEventSink>,
    pub prompter: DialoguerPrompter,
}

/// Create the adapters for an interactive session in `cwd`
pub fn create_session_ports(config: &Config, cwd: &Path, ui: &UiContext) -> SessionPorts {
    let runner: Arc<dyn CommandRunner> = Arc::new(ShellCommandRunner::new());
    let hooks = hooks_from_config(&config.hooks, Arc::clone(&runner), cwd.to_path_buf());

    SessionPorts {
        runner,
        hooks,
        events: Arc::new(ConsoleEventSink::stderr(*ui)),
        prompter: DialoguerPrompter::new(ui),
    }
}
