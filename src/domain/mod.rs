//! Domain Layer
//!
//! The core of one-start: run-context resolution and the selection rules,
//! without terminal or process I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (RunContext, Mode, tag model)
//! - `services/` - Resolution, templating and the selection pipeline
//! - `ports/` - Interface definitions for prompts, commands, hooks and events
//!
//! All I/O goes through trait-defined ports; infrastructure provides the adapters.

pub mod ports;
pub mod services;
pub mod value_objects;
