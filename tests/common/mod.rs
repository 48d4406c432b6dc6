//! Shared fakes for one-start integration tests.
//!
//! - `ScriptedPrompter`: answers prompts from a queue and records what was asked
//! - `RecordingRunner`: records commands instead of spawning them
//! - `RecordingSink`: captures workflow events
//! - `CapturingAfterBuild`: keeps the tags handed to the `after_build` hook

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use one_start::domain::ports::{
    CommandError, CommandSpec, HookError, PromptError, PromptRequest, WorkflowEvent,
    WorkflowEventSink,
};
use one_start::domain::value_objects::{BodyTags, HeadTags};
use one_start::{
    AfterBuildHook, AfterBuildPayload, CommandRunner, ContextValue, EnvMap, Prompter, RunContext,
};

/// One prompt as the prompter saw it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskedPrompt {
    pub message: String,
    pub choices: Vec<String>,
    pub initial: usize,
    pub multiple: bool,
}

/// Answers prompts in order; an exhausted script cancels
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<ContextValue>,
    pub asked: Vec<AskedPrompt>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| ContextValue::from(*a)).collect(),
            asked: Vec::new(),
        }
    }

    pub fn then_list(mut self, values: &[&str]) -> Self {
        let list: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        self.answers.push_back(ContextValue::from(list));
        self
    }

    pub fn then_text(mut self, value: &str) -> Self {
        self.answers.push_back(ContextValue::from(value));
        self
    }

    pub fn messages(&self) -> Vec<&str> {
        self.asked.iter().map(|p| p.message.as_str()).collect()
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, request: &PromptRequest<'_>) -> Result<ContextValue, PromptError> {
        self.asked.push(AskedPrompt {
            message: request.message.to_string(),
            choices: request.choices.iter().map(|c| c.name.clone()).collect(),
            initial: request.initial,
            multiple: request.multiple,
        });
        self.answers.pop_front().ok_or(PromptError::Cancelled)
    }
}

/// Records every command; commands listed in `failing` exit with 1
#[derive(Default)]
pub struct RecordingRunner {
    pub commands: RefCell<Vec<String>>,
    pub envs: RefCell<Vec<EnvMap>>,
    pub stdins: RefCell<Vec<Option<Vec<u8>>>>,
    failing: Vec<String>,
}

impl RecordingRunner {
    pub fn failing(command: &str) -> Self {
        Self {
            failing: vec![command.to_string()],
            ..Self::default()
        }
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, spec: &CommandSpec<'_>) -> Result<(), CommandError> {
        self.commands.borrow_mut().push(spec.command.to_string());
        self.envs.borrow_mut().push(spec.env.clone());
        self.stdins.borrow_mut().push(spec.stdin.map(<[u8]>::to_vec));
        if self.failing.iter().any(|c| c == spec.command) {
            return Err(CommandError::Failed {
                command: spec.command.to_string(),
                code: Some(1),
            });
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingSink {
    events: RefCell<Vec<WorkflowEvent>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<WorkflowEvent> {
        self.events.borrow().clone()
    }
}

impl WorkflowEventSink for RecordingSink {
    fn on_event(&self, event: WorkflowEvent) {
        self.events.borrow_mut().push(event);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AfterBuildCall {
    pub ctx: RunContext,
    pub head: HeadTags,
    pub body: BodyTags,
}

#[derive(Clone, Default)]
pub struct CapturingAfterBuild {
    pub calls: Rc<RefCell<Vec<AfterBuildCall>>>,
}

impl AfterBuildHook for CapturingAfterBuild {
    fn on_after_build(
        &self,
        ctx: &RunContext,
        payload: &AfterBuildPayload<'_>,
    ) -> Result<(), HookError> {
        self.calls.borrow_mut().push(AfterBuildCall {
            ctx: ctx.clone(),
            head: payload.head.clone(),
            body: payload.body.clone(),
        });
        Ok(())
    }
}

/// Write `html` to `root/dir/index.html`, returning the file path
pub fn write_build_html(root: &Path, dir: &str, html: &str) -> PathBuf {
    let dir = root.join(dir);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("index.html");
    fs::write(&path, html).unwrap();
    path
}

pub const REACT_CONFIG: &str = r#"
dev_command = "react-scripts start"
build_command = "react-scripts build"
build_dir = "dist/{host}-{stage}"

[[hosts]]
name = "A"
message = "Publish/Start at Host A"

[[hosts]]
name = "B"

[common.env]
BUILD_PATH = "dist/{host}-{stage}"
PORT = 3000

[stages.development.env]
PORT = 3456

[stages.testing.env]
PUBLIC_URL = "http://your-test-env.domain.com/"

[stages.production.env]
PUBLIC_URL = "https://cdn.domain.com/{host}/"
"#;
