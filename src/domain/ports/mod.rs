//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure provides the terminal, process and console implementations.

pub mod command_runner;
pub mod hooks;
pub mod prompter;
pub mod workflow_events;

pub use command_runner::{CommandError, CommandRunner, CommandSpec};
pub use hooks::{AfterBuildHook, AfterBuildPayload, BeforeStartHook, HookError, Hooks};
pub use prompter::{Choice, PromptError, PromptRequest, Prompter};
pub use workflow_events::{ExtractSkip, NoopEventSink, WorkflowEvent, WorkflowEventSink};
