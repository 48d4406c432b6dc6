//! Event Sink Implementations
//!
//! Provides concrete implementations of WorkflowEventSink:
//! - ConsoleEventSink: human-readable progress on stderr

mod console;

pub use console::ConsoleEventSink;
