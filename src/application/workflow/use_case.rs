//! Workflow Use Case
//!
//! Runs the mode state machine for one finalized run context:
//!
//! | mode      | actions                                       |
//! |-----------|-----------------------------------------------|
//! | start     | dev server                                    |
//! | build     | build, upload, extract                        |
//! | buildOnly | build, then ask for the next step             |
//! | extract   | extract                                       |
//! | upload    | upload                                        |
//!
//! Upload, extract and hook failures are reported and swallowed. A failed
//! build only stops the run under `on_build_failure = "abort"`. Ctrl-C, or a
//! command killed by a signal, stops the run after the current command.

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::{BuildFailurePolicy, Config};
use crate::domain::ports::{
    AfterBuildPayload, Choice, CommandError, CommandRunner, CommandSpec, ExtractSkip, HookError,
    Hooks, NoopEventSink, PromptError, PromptRequest, Prompter, WorkflowEvent, WorkflowEventSink,
};
use crate::domain::services::EnvMap;
use crate::domain::value_objects::{ContextValue, Mode, NextStep, RunContext};
use crate::error::{OneStartError, OneStartResult};
use crate::html::{extract, TagCodec};

pub const SELECT_NEXT: &str = "Do something after build";

/// Used when `build_html` is unset or empty
pub const DEFAULT_BUILD_HTML: &str = "index.html";

/// Mode state machine over injected ports
pub struct Workflow<'a> {
    config: &'a Config,
    ctx: &'a RunContext,
    env: &'a EnvMap,
    cwd: &'a Path,
    runner: &'a dyn CommandRunner,
    hooks: Option<&'a Hooks>,
    events: Arc<dyn WorkflowEventSink>,
    /// Set by the Ctrl-C handler
    interrupt: Arc<AtomicBool>,
}

impl<'a> Workflow<'a> {
    pub fn new(
        config: &'a Config,
        ctx: &'a RunContext,
        env: &'a EnvMap,
        cwd: &'a Path,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self {
            config,
            ctx,
            env,
            cwd,
            runner,
            hooks: None,
            events: Arc::new(NoopEventSink),
            interrupt: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_hooks(mut self, hooks: &'a Hooks) -> Self {
        self.hooks = Some(hooks);
        self
    }

    pub fn with_events(mut self, events: Arc<dyn WorkflowEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn with_interrupt(mut self, interrupt: Arc<AtomicBool>) -> Self {
        self.interrupt = interrupt;
        self
    }

    /// Run the actions of the context's mode.
    ///
    /// `prompter` is only used by `buildOnly` to ask for the next step.
    pub fn run(&self, prompter: &mut dyn Prompter) -> OneStartResult<()> {
        let mode = self.ctx.mode();
        self.events.on_event(WorkflowEvent::ModeSelected { mode });

        match mode {
            Mode::Start => self.run_dev(),
            Mode::Build => {
                self.do_build()?;
                self.do_upload()?;
                self.do_extract()
            }
            Mode::BuildOnly => {
                self.do_build()?;
                let next = self.select_next(prompter)?;
                self.dispatch(next)
            }
            Mode::Extract => self.do_extract(),
            Mode::Upload => self.do_upload(),
        }
    }

    fn dispatch(&self, next: NextStep) -> OneStartResult<()> {
        if next == NextStep::Exit {
            self.events.on_event(WorkflowEvent::Exited);
            return Ok(());
        }
        if next.includes_upload() {
            self.do_upload()?;
        }
        if next.includes_extract() {
            self.do_extract()?;
        }
        Ok(())
    }

    fn select_next(&self, prompter: &mut dyn Prompter) -> OneStartResult<NextStep> {
        let choices: Vec<Choice> = NextStep::ALL
            .iter()
            .map(|step| Choice::new(step.as_str()).with_message(step.label()))
            .collect();
        let initial = NextStep::ALL
            .iter()
            .position(|step| *step == NextStep::Both)
            .unwrap_or(0);

        let request = PromptRequest::single(SELECT_NEXT, &choices, initial);
        let answer = prompter.select(&request)?;
        let step = match &answer {
            ContextValue::Text(name) => NextStep::from_name(name),
            ContextValue::List(_) => None,
        };
        step.ok_or_else(|| {
            OneStartError::Prompt(PromptError::UnknownChoice {
                message: SELECT_NEXT.to_string(),
                answer: answer.render(),
            })
        })
    }

    fn run_dev(&self) -> OneStartResult<()> {
        let command = self.config.dev_command.resolve(self.ctx);
        self.events.on_event(WorkflowEvent::DevServerStarting {
            command: command.clone(),
        });
        let result = self.runner.run(&CommandSpec::new(&command, self.env, self.cwd));
        self.stop_if_interrupted(&command, result.as_ref().err())?;
        if let Err(err) = result {
            self.events.on_event(WorkflowEvent::DevServerFailed {
                error: err.to_string(),
            });
        }
        Ok(())
    }

    /// Stop when Ctrl-C was pressed or `error` says the command was killed
    fn stop_if_interrupted(
        &self,
        command: &str,
        error: Option<&CommandError>,
    ) -> OneStartResult<()> {
        let killed = error.is_some_and(CommandError::terminated_by_signal);
        if !killed && !self.interrupt.load(Ordering::SeqCst) {
            return Ok(());
        }
        tracing::debug!(command, killed, "run interrupted");
        self.events.on_event(WorkflowEvent::Interrupted {
            command: command.to_string(),
        });
        Err(OneStartError::Interrupted)
    }

    /// Build; errors only under the abort policy.
    pub fn do_build(&self) -> OneStartResult<()> {
        let command = self.config.build_command.resolve(self.ctx);
        self.events.on_event(WorkflowEvent::BuildStarted {
            command: command.clone(),
        });

        let result = self.runner.run(&CommandSpec::new(&command, self.env, self.cwd));
        self.stop_if_interrupted(&command, result.as_ref().err())?;
        match result {
            Ok(()) => {
                self.events.on_event(WorkflowEvent::BuildSucceeded);
                Ok(())
            }
            Err(err) => {
                let aborting = self.config.on_build_failure == BuildFailurePolicy::Abort;
                tracing::debug!(error = %err, aborting, "build command failed");
                self.events.on_event(WorkflowEvent::BuildFailed {
                    error: err.to_string(),
                    aborting,
                });
                if aborting {
                    Err(OneStartError::BuildAborted(err.to_string()))
                } else {
                    Ok(())
                }
            }
        }
    }

    pub fn do_upload(&self) -> OneStartResult<()> {
        let command = self
            .config
            .upload_command
            .resolve(self.ctx)
            .filter(|command| !command.trim().is_empty());
        let Some(command) = command else {
            self.events.on_event(WorkflowEvent::UploadSkipped);
            return Ok(());
        };

        self.events.on_event(WorkflowEvent::UploadStarted {
            command: command.clone(),
        });
        let result = self.runner.run(&CommandSpec::new(&command, self.env, self.cwd));
        self.stop_if_interrupted(&command, result.as_ref().err())?;
        match result {
            Ok(()) => self.events.on_event(WorkflowEvent::UploadFinished),
            Err(err) => self.events.on_event(WorkflowEvent::UploadFailed {
                error: err.to_string(),
            }),
        }
        Ok(())
    }

    pub fn do_extract(&self) -> OneStartResult<()> {
        let Some(hook) = self.hooks.and_then(|hooks| hooks.after_build.as_deref()) else {
            self.skip_extract(ExtractSkip::MissingAfterBuild);
            return Ok(());
        };

        let build_dir = self
            .config
            .build_dir
            .resolve(self.ctx)
            .filter(|dir| !dir.trim().is_empty());
        let Some(build_dir) = build_dir else {
            self.skip_extract(ExtractSkip::MissingBuildDir);
            return Ok(());
        };

        let build_html = self
            .config
            .build_html
            .resolve(self.ctx)
            .filter(|html| !html.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BUILD_HTML.to_string());

        let path = self.cwd.join(build_dir).join(build_html);
        if !path.is_file() {
            self.skip_extract(ExtractSkip::HtmlNotFound { path });
            return Ok(());
        }

        let html = match fs::read_to_string(&path) {
            Ok(html) => html,
            Err(err) => {
                self.events.on_event(WorkflowEvent::ExtractFailed {
                    path,
                    error: err.to_string(),
                });
                return Ok(());
            }
        };

        let extraction = extract(&html);
        let payload = AfterBuildPayload {
            head: &extraction.head,
            body: &extraction.body,
            html: &html,
            env: self.env,
            codec: TagCodec,
        };

        let result = hook.on_after_build(self.ctx, &payload);
        let command_error = match &result {
            Err(HookError::Command(err)) => Some(err),
            _ => None,
        };
        self.stop_if_interrupted("after_build", command_error)?;
        match result {
            Ok(()) => self.events.on_event(WorkflowEvent::ExtractCompleted {
                path,
                tag_count: extraction.tag_count(),
            }),
            Err(err) => self.events.on_event(WorkflowEvent::HookFailed {
                hook: "after_build",
                error: err.to_string(),
            }),
        }
        Ok(())
    }

    fn skip_extract(&self, reason: ExtractSkip) {
        tracing::debug!(?reason, "extract skipped");
        self.events.on_event(WorkflowEvent::ExtractSkipped(reason));
    }
}
