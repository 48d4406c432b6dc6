//! Selection pipeline - host, stage, options, then mode
//!
//! One prompt at a time, in a fixed order: host and stage are settled before
//! any option is asked, and every option before the mode. The result is a
//! frozen [`RunContext`].

use crate::config::Config;
use crate::domain::ports::{Choice, PromptError, PromptRequest, Prompter};
use crate::domain::value_objects::{ContextValue, Mode, RunContext, RunContextBuilder};

/// Stage name that skips the mode prompt and starts the dev server
pub const DEVELOPMENT_STAGE: &str = "development";

pub const SELECT_HOST: &str = "Select Host";
pub const SELECT_STAGE: &str = "Select Stage Environment Config";
pub const SELECT_MODE: &str = "Select Start Mode";

/// Runs the selection prompts against a config
pub struct SelectionPipeline<'a> {
    config: &'a Config,
    prompter: &'a mut dyn Prompter,
}

impl<'a> SelectionPipeline<'a> {
    pub fn new(config: &'a Config, prompter: &'a mut dyn Prompter) -> Self {
        Self { config, prompter }
    }

    pub fn run(mut self) -> Result<RunContext, PromptError> {
        let mut builder = RunContext::builder();

        let host = self.select_host()?;
        builder.set_host(host);

        let stage = self.select_stage()?;
        builder.set_stage(stage);

        self.select_options(&mut builder)?;

        let mode = self.select_mode(builder.current_stage())?;
        let ctx = builder.build(mode);
        tracing::debug!(
            host = ?ctx.host(),
            stage = ?ctx.stage(),
            mode = %ctx.mode(),
            "selections complete"
        );
        Ok(ctx)
    }

    fn select_host(&mut self) -> Result<Option<String>, PromptError> {
        let config = self.config;
        if config.hosts.is_empty() {
            return Ok(None);
        }
        let request = PromptRequest::single(SELECT_HOST, &config.hosts, 0);
        self.ask_one(&request).map(Some)
    }

    fn select_stage(&mut self) -> Result<Option<String>, PromptError> {
        let config = self.config;
        let stages = &config.stages;
        match stages.len() {
            0 => Ok(None),
            1 => Ok(stages.keys().next().cloned()),
            _ => {
                let choices: Vec<Choice> = stages
                    .iter()
                    .map(|(name, stage)| Choice {
                        name: name.clone(),
                        message: stage.description.clone(),
                    })
                    .collect();
                let request = PromptRequest::single(SELECT_STAGE, &choices, 0);
                self.ask_one(&request).map(Some)
            }
        }
    }

    fn select_options(&mut self, builder: &mut RunContextBuilder) -> Result<(), PromptError> {
        let config = self.config;
        for option in &config.options {
            if !option.applies_to(builder.current_stage()) {
                tracing::debug!(option = %option.name, "option skipped for stage");
                continue;
            }
            let request = PromptRequest {
                message: &option.message,
                choices: &option.choices,
                initial: option.initial,
                multiple: option.multiple,
            };
            let answer = self.ask(&request)?;
            builder.record_answer(option.name.clone(), answer);
        }
        Ok(())
    }

    fn select_mode(&mut self, stage: Option<&str>) -> Result<Mode, PromptError> {
        if stage == Some(DEVELOPMENT_STAGE) {
            return Ok(Mode::Start);
        }

        let start = self.config.start_in_mode_menu.then_some(Mode::Start);
        let choices: Vec<Choice> = start
            .into_iter()
            .chain(Mode::MENU)
            .map(|mode| Choice::new(mode.as_str()).with_message(mode.label()))
            .collect();

        let request = PromptRequest::single(SELECT_MODE, &choices, 0);
        let answer = self.ask_one(&request)?;
        Mode::from_name(&answer).ok_or_else(|| PromptError::UnknownChoice {
            message: SELECT_MODE.to_string(),
            answer,
        })
    }

    fn ask_one(&mut self, request: &PromptRequest<'_>) -> Result<String, PromptError> {
        match self.ask(request)? {
            ContextValue::Text(name) => Ok(name),
            ContextValue::List(names) => Err(PromptError::UnknownChoice {
                message: request.message.to_string(),
                answer: names.join(","),
            }),
        }
    }

    /// Ask and check that every returned name is one of the offered choices
    fn ask(&mut self, request: &PromptRequest<'_>) -> Result<ContextValue, PromptError> {
        if request.choices.is_empty() {
            return Err(PromptError::NoChoices {
                message: request.message.to_string(),
            });
        }

        let answer = self.prompter.select(request)?;
        let offered = |name: &str| request.choices.iter().any(|c| c.name == name);
        let unknown = match &answer {
            ContextValue::Text(name) => (!offered(name)).then(|| name.clone()),
            ContextValue::List(names) => names.iter().find(|n| !offered(n)).cloned(),
        };

        match unknown {
            Some(answer) => Err(PromptError::UnknownChoice {
                message: request.message.to_string(),
                answer,
            }),
            None => Ok(answer),
        }
    }
}
