//! Property and environment resolution
//!
//! Config values are either literals or functions of the [`RunContext`].
//! [`Resolvable`] models both; [`build_env`] merges the common and stage
//! environment layers and resolves them into a flat [`EnvMap`].

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::template::Template;
use crate::domain::value_objects::RunContext;

type ComputeFn<T> = Arc<dyn Fn(&RunContext) -> T + Send + Sync>;

/// A config value that is fixed or computed from the run context
pub enum Resolvable<T> {
    Literal(T),
    Computed(ComputeFn<T>),
}

impl<T: Clone> Resolvable<T> {
    pub fn literal(value: T) -> Self {
        Resolvable::Literal(value)
    }

    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&RunContext) -> T + Send + Sync + 'static,
    {
        Resolvable::Computed(Arc::new(f))
    }

    /// Computed values are evaluated on every call; nothing is cached.
    pub fn resolve(&self, ctx: &RunContext) -> T {
        match self {
            Resolvable::Literal(value) => value.clone(),
            Resolvable::Computed(f) => f(ctx),
        }
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, Resolvable::Computed(_))
    }
}

impl<T: Clone> Clone for Resolvable<T> {
    fn clone(&self) -> Self {
        match self {
            Resolvable::Literal(value) => Resolvable::Literal(value.clone()),
            Resolvable::Computed(f) => Resolvable::Computed(Arc::clone(f)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Resolvable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolvable::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Resolvable::Computed(_) => f.write_str("Computed(<fn>)"),
        }
    }
}

impl<T> From<T> for Resolvable<T> {
    fn from(value: T) -> Self {
        Resolvable::Literal(value)
    }
}

impl From<&str> for Resolvable<String> {
    fn from(value: &str) -> Self {
        Resolvable::Literal(value.to_string())
    }
}

impl Resolvable<String> {
    /// Literal unless the string contains `{key}` placeholders
    pub fn from_template(source: &str) -> Self {
        let template = Template::parse(source);
        if template.has_placeholders() {
            Resolvable::computed(move |ctx| template.render(ctx))
        } else {
            Resolvable::Literal(template.literal_text())
        }
    }
}

impl Resolvable<Option<String>> {
    pub fn from_optional_template(source: Option<&str>) -> Self {
        match source {
            None => Resolvable::Literal(None),
            Some(source) => {
                let template = Template::parse(source);
                if template.has_placeholders() {
                    Resolvable::computed(move |ctx| Some(template.render(ctx)))
                } else {
                    Resolvable::Literal(Some(template.literal_text()))
                }
            }
        }
    }
}

/// Declared value of an environment variable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnvValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for EnvValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvValue::Bool(b) => write!(f, "{}", b),
            EnvValue::Integer(i) => write!(f, "{}", i),
            EnvValue::Float(x) => write!(f, "{}", x),
            EnvValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for EnvValue {
    fn from(value: &str) -> Self {
        EnvValue::Text(value.to_string())
    }
}

impl From<bool> for EnvValue {
    fn from(value: bool) -> Self {
        EnvValue::Bool(value)
    }
}

impl From<i64> for EnvValue {
    fn from(value: i64) -> Self {
        EnvValue::Integer(value)
    }
}

impl EnvValue {
    /// Text values with placeholders become computed entries
    pub fn into_resolvable(self) -> Resolvable<EnvValue> {
        match self {
            EnvValue::Text(text) => {
                let template = Template::parse(&text);
                if template.has_placeholders() {
                    Resolvable::computed(move |ctx| EnvValue::Text(template.render(ctx)))
                } else {
                    Resolvable::Literal(EnvValue::Text(template.literal_text()))
                }
            }
            other => Resolvable::Literal(other),
        }
    }
}

/// Declarative environment layer: variable name to value
pub type EnvSpec = IndexMap<String, Resolvable<EnvValue>>;

/// Fully resolved environment handed to commands and hooks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EnvMap(IndexMap<String, String>);

impl EnvMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Merge `stage` over `common` and resolve every entry against `ctx`.
///
/// Keys from `common` keep their position; a stage entry with the same key
/// replaces the value in place. Stage-only keys follow in stage order.
pub fn build_env(common: Option<&EnvSpec>, stage: Option<&EnvSpec>, ctx: &RunContext) -> EnvMap {
    let mut merged: IndexMap<&str, &Resolvable<EnvValue>> = IndexMap::new();
    for layer in [common, stage].into_iter().flatten() {
        for (key, value) in layer {
            merged.insert(key.as_str(), value);
        }
    }

    let mut env = EnvMap::new();
    for (key, value) in merged {
        let resolved = value.resolve(ctx).to_string();
        tracing::debug!(key, value = %resolved, "resolved env entry");
        env.insert(key, resolved);
    }
    env
}
