//! Terminal prompts

mod menu;

pub use menu::DialoguerPrompter;
