//! Session Use Case
//!
//! One interactive run, end to end:
//! 1. Collect selections into a run context
//! 2. Resolve the environment for the chosen stage
//! 3. Call the `before_start` hook
//! 4. Run the mode state machine
//!
//! Cancelling any prompt ends the session as [`SessionOutcome::Aborted`].
//! Ctrl-C ends it with [`OneStartError::Interrupted`].

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::Config;
use crate::domain::ports::{
    CommandRunner, HookError, Hooks, NoopEventSink, PromptError, Prompter, WorkflowEvent,
    WorkflowEventSink,
};
use crate::domain::services::{build_env, EnvMap, SelectionPipeline};
use crate::domain::value_objects::RunContext;
use crate::error::{OneStartError, OneStartResult};

use super::workflow::Workflow;

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The workflow ran for this context
    Completed { ctx: RunContext, env: EnvMap },
    /// A prompt was cancelled
    Aborted,
}

pub struct Session<'a> {
    config: &'a Config,
    cwd: &'a Path,
    runner: &'a dyn CommandRunner,
    hooks: &'a Hooks,
    events: Arc<dyn WorkflowEventSink>,
    interrupt: Arc<AtomicBool>,
}

impl<'a> Session<'a> {
    pub fn new(
        config: &'a Config,
        cwd: &'a Path,
        runner: &'a dyn CommandRunner,
        hooks: &'a Hooks,
    ) -> Self {
        Self {
            config,
            cwd,
            runner,
            hooks,
            events: Arc::new(NoopEventSink),
            interrupt: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_events(mut self, events: Arc<dyn WorkflowEventSink>) -> Self {
        self.events = events;
        self
    }

    /// Share the flag set by the Ctrl-C handler
    pub fn with_interrupt(mut self, interrupt: Arc<AtomicBool>) -> Self {
        self.interrupt = interrupt;
        self
    }

    pub fn run(&self, prompter: &mut dyn Prompter) -> OneStartResult<SessionOutcome> {
        let ctx = match SelectionPipeline::new(self.config, prompter).run() {
            Ok(ctx) => ctx,
            Err(PromptError::Cancelled) => return Ok(SessionOutcome::Aborted),
            Err(err) => return Err(err.into()),
        };

        let env = build_env(
            Some(&self.config.common_env),
            self.config.stage_env(ctx.stage()),
            &ctx,
        );

        if let Some(hook) = self.hooks.before_start.as_deref() {
            let result = hook.on_before_start(&ctx, &env);
            let killed = matches!(
                &result,
                Err(HookError::Command(err)) if err.terminated_by_signal()
            );
            if killed || self.interrupt.load(Ordering::SeqCst) {
                self.events.on_event(WorkflowEvent::Interrupted {
                    command: "before_start".to_string(),
                });
                return Err(OneStartError::Interrupted);
            }
            if let Err(err) = result {
                self.events.on_event(WorkflowEvent::HookFailed {
                    hook: "before_start",
                    error: err.to_string(),
                });
            }
        }

        let workflow = Workflow::new(self.config, &ctx, &env, self.cwd, self.runner)
            .with_hooks(self.hooks)
            .with_events(Arc::clone(&self.events))
            .with_interrupt(Arc::clone(&self.interrupt));

        match workflow.run(prompter) {
            Ok(()) => Ok(SessionOutcome::Completed { ctx, env }),
            Err(OneStartError::Prompt(PromptError::Cancelled)) => Ok(SessionOutcome::Aborted),
            Err(err) => Err(err),
        }
    }
}
