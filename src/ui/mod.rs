//! Console presentation: design tokens, capability detection and messages.

pub mod context;
pub mod messages;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
