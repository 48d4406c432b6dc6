//! Prompter port - ask the user to pick one (or several) of N named choices
//!
//! The selection pipeline and the `buildOnly` follow-up menu only ever talk
//! to this trait; rendering is left to the adapter.

use std::io;

use thiserror::Error;

use crate::domain::value_objects::ContextValue;

/// A named choice with an optional display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub name: String,
    pub message: Option<String>,
}

impl Choice {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Text shown to the user: the message when present, else the name
    pub fn label(&self) -> &str {
        self.message.as_deref().unwrap_or(&self.name)
    }
}

/// One outstanding prompt
#[derive(Debug, Clone, Copy)]
pub struct PromptRequest<'a> {
    pub message: &'a str,
    pub choices: &'a [Choice],
    /// Index of the pre-selected choice (clamped by adapters)
    pub initial: usize,
    /// Multi-select: the answer is a list of names
    pub multiple: bool,
}

impl<'a> PromptRequest<'a> {
    pub fn single(message: &'a str, choices: &'a [Choice], initial: usize) -> Self {
        Self {
            message,
            choices,
            initial,
            multiple: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum PromptError {
    /// The user dismissed the prompt (Esc, Ctrl-C)
    #[error("prompt cancelled")]
    Cancelled,

    #[error("prompt '{message}' has no choices")]
    NoChoices { message: String },

    /// The answer does not name any of the offered choices
    #[error("'{answer}' is not a choice of prompt '{message}'")]
    UnknownChoice { message: String, answer: String },

    #[error("prompt failed: {0}")]
    Io(#[from] io::Error),
}

/// Interactive choice capability
///
/// Implementations:
/// - `DialoguerPrompter` - terminal menus
/// - scripted fakes in tests
pub trait Prompter {
    /// Ask a single question. Returns `ContextValue::Text` for single
    /// selection and `ContextValue::List` when `request.multiple` is set.
    fn select(&mut self, request: &PromptRequest<'_>) -> Result<ContextValue, PromptError>;
}
