//! Command Hook
//!
//! Runs a configured shell command as a hook. The hook input is written to
//! the command's stdin as one JSON document:
//!
//! - `before_start`: the run context (`host`, `stage`, option answers, `mode`)
//! - `after_build`: the run context fields plus `head`, `body`, `html` and
//!   `rendered`, where every extracted tag is re-encoded as markup

use std::path::PathBuf;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::config::HookCommands;
use crate::domain::ports::{
    AfterBuildHook, AfterBuildPayload, BeforeStartHook, CommandRunner, CommandSpec, HookError,
    Hooks,
};
use crate::domain::services::{EnvMap, Resolvable};
use crate::domain::value_objects::{RunContext, TagAttribute};

pub struct CommandHook {
    command: Resolvable<String>,
    runner: Arc<dyn CommandRunner>,
    cwd: PathBuf,
}

impl CommandHook {
    pub fn new(command: Resolvable<String>, runner: Arc<dyn CommandRunner>, cwd: PathBuf) -> Self {
        Self {
            command,
            runner,
            cwd,
        }
    }

    fn run(&self, ctx: &RunContext, env: &EnvMap, payload: &Value) -> Result<(), HookError> {
        let command = self.command.resolve(ctx);
        let input = serde_json::to_vec(payload)?;
        tracing::debug!(command = %command, bytes = input.len(), "running hook");
        self.runner
            .run(&CommandSpec::new(&command, env, &self.cwd).with_stdin(&input))?;
        Ok(())
    }
}

impl BeforeStartHook for CommandHook {
    fn on_before_start(&self, ctx: &RunContext, env: &EnvMap) -> Result<(), HookError> {
        let payload = serde_json::to_value(ctx)?;
        self.run(ctx, env, &payload)
    }
}

impl AfterBuildHook for CommandHook {
    fn on_after_build(
        &self,
        ctx: &RunContext,
        payload: &AfterBuildPayload<'_>,
    ) -> Result<(), HookError> {
        let document = after_build_document(ctx, payload)?;
        self.run(ctx, payload.env, &document)
    }
}

/// JSON handed to an `after_build` command
pub fn after_build_document(
    ctx: &RunContext,
    payload: &AfterBuildPayload<'_>,
) -> Result<Value, HookError> {
    let mut document = serde_json::to_value(ctx)?;
    let Value::Object(fields) = &mut document else {
        return Err(HookError::Failed("run context is not a JSON object".to_string()));
    };

    let codec = payload.codec;
    let metas = |tags: &[TagAttribute]| tags.iter().map(|t| codec.create_meta(t)).collect::<Vec<_>>();
    let links = |tags: &[TagAttribute]| tags.iter().map(|t| codec.create_link(t)).collect::<Vec<_>>();
    let scripts =
        |tags: &[TagAttribute]| tags.iter().map(|t| codec.create_script(t)).collect::<Vec<_>>();
    let styles =
        |tags: &[TagAttribute]| tags.iter().map(|t| codec.create_style(t)).collect::<Vec<_>>();
    let rendered = json!({
        "head": {
            "metas": metas(&payload.head.metas),
            "links": links(&payload.head.links),
            "scripts": scripts(&payload.head.scripts),
            "styles": styles(&payload.head.styles),
        },
        "body": {
            "links": links(&payload.body.links),
            "scripts": scripts(&payload.body.scripts),
            "styles": styles(&payload.body.styles),
        },
    });

    fields.insert("head".to_string(), serde_json::to_value(payload.head)?);
    fields.insert("body".to_string(), serde_json::to_value(payload.body)?);
    fields.insert("html".to_string(), Value::String(payload.html.to_string()));
    fields.insert("rendered".to_string(), rendered);
    Ok(document)
}

/// Turn the `[hooks]` table into hook objects run through `runner`
pub fn hooks_from_config(
    commands: &HookCommands,
    runner: Arc<dyn CommandRunner>,
    cwd: PathBuf,
) -> Hooks {
    let mut hooks = Hooks::new();
    if let Some(command) = &commands.before_start {
        hooks = hooks.with_before_start(CommandHook::new(
            command.clone(),
            Arc::clone(&runner),
            cwd.clone(),
        ));
    }
    if let Some(command) = &commands.after_build {
        hooks = hooks.with_after_build(CommandHook::new(command.clone(), runner, cwd));
    }
    hooks
}
