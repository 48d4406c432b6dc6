//! Console Event Sink
//!
//! Renders workflow events as status lines on stderr, so the output of the
//! build and upload commands on stdout stays untouched.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{ExtractSkip, WorkflowEvent, WorkflowEventSink};
use crate::ui::context::UiContext;
use crate::ui::messages;
use crate::ui::output::status_line;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub struct ConsoleEventSink {
    ui: UiContext,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stderr(ui: UiContext) -> Self {
        Self::with_writer(ui, io::stderr())
    }

    pub fn with_writer<W: Write + Send + 'static>(ui: UiContext, writer: W) -> Self {
        Self {
            ui,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Status line for an event
    pub fn render(&self, event: &WorkflowEvent) -> String {
        let (icon, text) = match event {
            WorkflowEvent::ModeSelected { mode } => (
                Icon::Arrow,
                ColoredText::dim(messages::mode_selected(mode.as_str())),
            ),
            WorkflowEvent::DevServerStarting { command } => (
                Icon::Dev,
                ColoredText::info(format!("{} {}", messages::START_DEV, command)),
            ),
            WorkflowEvent::DevServerFailed { error } => (Icon::Error, ColoredText::error(error)),
            WorkflowEvent::BuildStarted { command } => (
                Icon::Build,
                ColoredText::info(format!("{} {}", messages::START_BUILD, command)),
            ),
            WorkflowEvent::BuildSucceeded => {
                (Icon::Success, ColoredText::success(messages::BUILD_SUCCESS))
            }
            WorkflowEvent::BuildFailed { error, aborting } => {
                let text = messages::build_failed(error, *aborting);
                if *aborting {
                    (Icon::Error, ColoredText::error(text))
                } else {
                    (Icon::Warning, ColoredText::warning(text))
                }
            }
            WorkflowEvent::UploadSkipped => (
                Icon::Warning,
                ColoredText::warning(messages::UPLOAD_COMMAND_NOT_FOUND),
            ),
            WorkflowEvent::UploadStarted { command } => (
                Icon::Upload,
                ColoredText::info(format!("{} {}", messages::START_UPLOAD, command)),
            ),
            WorkflowEvent::UploadFinished => {
                (Icon::Success, ColoredText::success(messages::UPLOAD_DONE))
            }
            WorkflowEvent::UploadFailed { error } => (Icon::Error, ColoredText::error(error)),
            WorkflowEvent::ExtractSkipped(reason) => {
                let text = match reason {
                    ExtractSkip::MissingAfterBuild => messages::AFTER_BUILD_NOT_FOUND.to_string(),
                    ExtractSkip::MissingBuildDir => messages::BUILD_DIR_NOT_FOUND.to_string(),
                    ExtractSkip::HtmlNotFound { path } => {
                        messages::build_html_not_found(&path.display().to_string())
                    }
                };
                (Icon::Warning, ColoredText::warning(text))
            }
            WorkflowEvent::ExtractFailed { path, error } => (
                Icon::Error,
                ColoredText::error(format!("{}: {}", path.display(), error)),
            ),
            WorkflowEvent::ExtractCompleted { path, tag_count } => (
                Icon::Extract,
                ColoredText::success(messages::extracted(
                    *tag_count,
                    &path.display().to_string(),
                )),
            ),
            WorkflowEvent::HookFailed { hook, error } => (
                Icon::Warning,
                ColoredText::warning(messages::hook_failed(hook, error)),
            ),
            WorkflowEvent::Exited => (Icon::Arrow, ColoredText::dim(messages::EXIT)),
            WorkflowEvent::Interrupted { command } => {
                (Icon::Error, ColoredText::error(messages::interrupted(command)))
            }
        };

        status_line(icon, &text, &self.ui)
    }
}

impl WorkflowEventSink for ConsoleEventSink {
    fn on_event(&self, event: WorkflowEvent) {
        if matches!(event, WorkflowEvent::ModeSelected { .. }) && self.ui.verbose == 0 {
            return;
        }
        let line = self.render(&event);
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}
