//! RunContext value object - the facts collected for one run
//!
//! Built incrementally by the selection steps through [`RunContextBuilder`]
//! and frozen once the mode is known. Every computed config value and every
//! hook sees the same context.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::Mode;

pub const HOST_KEY: &str = "host";
pub const STAGE_KEY: &str = "stage";
pub const MODE_KEY: &str = "mode";

/// Keys written by the pipeline itself; options may not use them.
pub const RESERVED_KEYS: [&str; 3] = [HOST_KEY, STAGE_KEY, MODE_KEY];

/// A single answer: one name, or several for multi-select prompts
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum ContextValue {
    Text(String),
    List(Vec<String>),
}

impl ContextValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContextValue::Text(s) => Some(s),
            ContextValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ContextValue::Text(_) => None,
            ContextValue::List(items) => Some(items),
        }
    }

    /// Flat rendering used by templates (lists are comma-joined)
    pub fn render(&self) -> String {
        match self {
            ContextValue::Text(s) => s.clone(),
            ContextValue::List(items) => items.join(","),
        }
    }
}

impl From<&str> for ContextValue {
    fn from(value: &str) -> Self {
        ContextValue::Text(value.to_string())
    }
}

impl From<String> for ContextValue {
    fn from(value: String) -> Self {
        ContextValue::Text(value)
    }
}

impl From<Vec<String>> for ContextValue {
    fn from(value: Vec<String>) -> Self {
        ContextValue::List(value)
    }
}

/// Resolved per-run facts: host, stage, option answers and mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    values: IndexMap<String, ContextValue>,
    mode: Mode,
}

impl RunContext {
    pub fn builder() -> RunContextBuilder {
        RunContextBuilder::default()
    }

    pub fn host(&self) -> Option<&str> {
        self.values.get(HOST_KEY).and_then(ContextValue::as_text)
    }

    pub fn stage(&self) -> Option<&str> {
        self.values.get(STAGE_KEY).and_then(ContextValue::as_text)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Look up any key, including `host`, `stage` and `mode`
    pub fn get(&self, key: &str) -> Option<&ContextValue> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Option answers only, in the order they were recorded
    pub fn answers(&self) -> impl Iterator<Item = (&str, &ContextValue)> {
        self.values
            .iter()
            .filter(|(k, _)| !RESERVED_KEYS.contains(&k.as_str()))
            .map(|(k, v)| (k.as_str(), v))
    }
}

impl Serialize for RunContext {
    /// `host` and `stage` are always present (null when undefined)
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let answers: Vec<_> = self.answers().collect();
        let mut map = serializer.serialize_map(Some(answers.len() + 3))?;
        map.serialize_entry(HOST_KEY, &self.host())?;
        map.serialize_entry(STAGE_KEY, &self.stage())?;
        for (key, value) in answers {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry(MODE_KEY, &self.mode)?;
        map.end()
    }
}

/// Accumulates selections until the mode is decided
#[derive(Debug, Clone, Default)]
pub struct RunContextBuilder {
    host: Option<String>,
    stage: Option<String>,
    answers: IndexMap<String, ContextValue>,
}

impl RunContextBuilder {
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = Some(stage.into());
        self
    }

    pub fn answer(mut self, name: impl Into<String>, value: impl Into<ContextValue>) -> Self {
        self.record_answer(name, value);
        self
    }

    pub fn set_host(&mut self, host: Option<String>) {
        self.host = host;
    }

    pub fn set_stage(&mut self, stage: Option<String>) {
        self.stage = stage;
    }

    /// Record an option answer. The first write of a key wins.
    pub fn record_answer(&mut self, name: impl Into<String>, value: impl Into<ContextValue>) {
        self.answers.entry(name.into()).or_insert(value.into());
    }

    pub fn current_stage(&self) -> Option<&str> {
        self.stage.as_deref()
    }

    pub fn build(self, mode: Mode) -> RunContext {
        let mut values = IndexMap::with_capacity(self.answers.len() + 3);
        if let Some(host) = self.host {
            values.insert(HOST_KEY.to_string(), ContextValue::Text(host));
        }
        if let Some(stage) = self.stage {
            values.insert(STAGE_KEY.to_string(), ContextValue::Text(stage));
        }
        for (key, value) in self.answers {
            if !RESERVED_KEYS.contains(&key.as_str()) {
                values.insert(key, value);
            }
        }
        values.insert(
            MODE_KEY.to_string(),
            ContextValue::Text(mode.as_str().to_string()),
        );
        RunContext { values, mode }
    }
}
