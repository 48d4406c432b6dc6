//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod mode;
mod run_context;
mod tag;

pub use mode::{Mode, NextStep};
pub use run_context::{ContextValue, RunContext, RunContextBuilder, RESERVED_KEYS};
pub use tag::{BodyTags, Extraction, HeadTags, TagAttribute, TagKind, CODE_KEY};
