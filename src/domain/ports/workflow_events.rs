//! Workflow Event Port
//!
//! Progress, warnings and failures of the mode state machine are reported
//! as events; the console sink renders them, tests record them.

use std::path::PathBuf;

use crate::domain::value_objects::Mode;

/// Why an extract step did nothing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractSkip {
    /// No `after_build` hook configured
    MissingAfterBuild,
    /// `build_dir` unset or resolved to an empty string
    MissingBuildDir,
    /// The resolved HTML path does not exist
    HtmlNotFound { path: PathBuf },
}

/// Event emitted while running a mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowEvent {
    /// Mode chosen, state machine starting
    ModeSelected { mode: Mode },

    DevServerStarting { command: String },
    DevServerFailed { error: String },

    BuildStarted { command: String },
    BuildSucceeded,
    /// `aborting` is true when the config stops the run on build failure
    BuildFailed { error: String, aborting: bool },

    /// No upload command configured
    UploadSkipped,
    UploadStarted { command: String },
    UploadFinished,
    UploadFailed { error: String },

    ExtractSkipped(ExtractSkip),
    /// The HTML exists but could not be read
    ExtractFailed { path: PathBuf, error: String },
    ExtractCompleted { path: PathBuf, tag_count: usize },

    /// A hook returned an error; the run continues
    HookFailed { hook: &'static str, error: String },

    /// `exit` chosen in the post-build menu
    Exited,

    /// Ctrl-C during or after `command`; nothing else runs
    Interrupted { command: String },
}

/// Trait for receiving workflow events
///
/// Implementations:
/// - `ConsoleEventSink`: human-readable terminal output
/// - `NoopEventSink`: silent operation
pub trait WorkflowEventSink {
    fn on_event(&self, event: WorkflowEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl WorkflowEventSink for NoopEventSink {
    fn on_event(&self, _event: WorkflowEvent) {}
}
