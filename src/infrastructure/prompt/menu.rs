//! Dialoguer Prompter
//!
//! Arrow-key menus for single selection and space-to-toggle menus for
//! `multiple` options. Esc or `q` cancels.

use std::io;

use dialoguer::{MultiSelect, Select};

use crate::domain::ports::{PromptError, PromptRequest, Prompter};
use crate::domain::value_objects::ContextValue;
use crate::ui::context::UiContext;
use crate::ui::theme::OneStartTheme;

pub struct DialoguerPrompter {
    theme: OneStartTheme,
}

impl DialoguerPrompter {
    pub fn new(ui: &UiContext) -> Self {
        Self {
            theme: OneStartTheme::new(ui.unicode, ui.color),
        }
    }
}

// Ctrl-C inside a menu surfaces as an interrupted read
fn prompt_error(err: dialoguer::Error) -> PromptError {
    let err = io::Error::from(err);
    if err.kind() == io::ErrorKind::Interrupted {
        PromptError::Cancelled
    } else {
        PromptError::Io(err)
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&mut self, request: &PromptRequest<'_>) -> Result<ContextValue, PromptError> {
        if request.choices.is_empty() {
            return Err(PromptError::NoChoices {
                message: request.message.to_string(),
            });
        }

        let labels: Vec<&str> = request.choices.iter().map(|c| c.label()).collect();
        let initial = request.initial.min(labels.len() - 1);

        if request.multiple {
            let defaults: Vec<bool> = (0..labels.len()).map(|i| i == initial).collect();
            let picked = MultiSelect::with_theme(&self.theme)
                .with_prompt(request.message)
                .items(&labels)
                .defaults(&defaults)
                .interact_opt()
                .map_err(prompt_error)?
                .ok_or(PromptError::Cancelled)?;

            let names = picked
                .into_iter()
                .map(|i| request.choices[i].name.clone())
                .collect();
            Ok(ContextValue::List(names))
        } else {
            let picked = Select::with_theme(&self.theme)
                .with_prompt(request.message)
                .items(&labels)
                .default(initial)
                .interact_opt()
                .map_err(prompt_error)?
                .ok_or(PromptError::Cancelled)?;

            Ok(ContextValue::Text(request.choices[picked].name.clone()))
        }
    }
}
