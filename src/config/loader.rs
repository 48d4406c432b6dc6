//! Configuration loading
//!
//! Reads `one-start.toml`, reports unknown keys and placeholders as warnings
//! (with a suggestion when a known name is close), validates option names
//! and turns placeholder strings into computed values.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::ports::Choice;
use crate::domain::services::{EnvSpec, EnvValue, Resolvable, Template};
use crate::domain::value_objects::RESERVED_KEYS;
use crate::error::{OneStartError, OneStartResult};

use super::types::{Config, HookCommands, OptionSpec, RawConfig, RawOption, StageConfig};

/// Fixed name of the config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "one-start.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Unknown key, or the name inside an unknown `{placeholder}`
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
    pub kind: WarningKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningKind {
    UnknownKey,
    /// `{key}` names neither host/stage/mode nor a declared option, so it
    /// always renders empty. `field` is the config key holding the string.
    UnknownPlaceholder { field: String },
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> OneStartResult<(Config, Vec<ConfigWarning>)> {
    if !path.exists() {
        return Err(OneStartError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse TOML text; `origin` only labels warnings and errors.
pub fn parse_with_warnings(
    content: &str,
    origin: &Path,
) -> OneStartResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let raw: RawConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| OneStartError::InvalidConfig {
        file: origin.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut warnings: Vec<ConfigWarning> = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: origin.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                kind: WarningKind::UnknownKey,
            }
        })
        .collect();
    warnings.extend(placeholder_warnings(&raw, content, origin));

    let config = resolve(raw, origin)?;
    tracing::debug!(
        file = %origin.display(),
        hosts = config.hosts.len(),
        stages = config.stages.len(),
        options = config.options.len(),
        "loaded config"
    );
    Ok((config, warnings))
}

fn resolve(raw: RawConfig, origin: &Path) -> OneStartResult<Config> {
    let missing = |key: &str| OneStartError::MissingConfigKey {
        key: key.to_string(),
        file: origin.to_path_buf(),
    };
    let dev_command = raw.dev_command.ok_or_else(|| missing("dev_command"))?;
    let build_command = raw.build_command.ok_or_else(|| missing("build_command"))?;

    let options = resolve_options(raw.options)?;

    let stages = raw
        .stages
        .into_iter()
        .map(|(name, stage)| {
            let config = StageConfig {
                description: stage.description,
                env: env_spec(stage.env),
            };
            (name, config)
        })
        .collect();

    Ok(Config {
        dev_command: Resolvable::from_template(&dev_command),
        build_command: Resolvable::from_template(&build_command),
        upload_command: Resolvable::from_optional_template(raw.upload_command.as_deref()),
        build_dir: Resolvable::from_optional_template(raw.build_dir.as_deref()),
        build_html: Resolvable::from_optional_template(raw.build_html.as_deref()),
        hosts: raw.hosts.into_iter().map(Choice::from).collect(),
        stages,
        options,
        common_env: env_spec(raw.common.env),
        start_in_mode_menu: raw.start_in_mode_menu,
        on_build_failure: raw.on_build_failure,
        hooks: HookCommands {
            before_start: raw.hooks.before_start.as_deref().map(Resolvable::from_template),
            after_build: raw.hooks.after_build.as_deref().map(Resolvable::from_template),
        },
    })
}

/// Placeholders that no selection step will ever fill
fn placeholder_warnings(raw: &RawConfig, content: &str, origin: &Path) -> Vec<ConfigWarning> {
    let known: Vec<&str> = RESERVED_KEYS
        .iter()
        .copied()
        .chain(raw.options.iter().map(|option| option.name.as_str()))
        .collect();

    let top_level = [
        ("dev_command", &raw.dev_command),
        ("build_command", &raw.build_command),
        ("upload_command", &raw.upload_command),
        ("build_dir", &raw.build_dir),
        ("build_html", &raw.build_html),
        ("hooks.before_start", &raw.hooks.before_start),
        ("hooks.after_build", &raw.hooks.after_build),
    ];
    let mut templates: Vec<(String, &str)> = top_level
        .into_iter()
        .filter_map(|(field, value)| Some((field.to_string(), value.as_deref()?)))
        .collect();

    let env_layers = std::iter::once(("common.env".to_string(), &raw.common.env)).chain(
        raw.stages
            .iter()
            .map(|(name, stage)| (format!("stages.{}.env", name), &stage.env)),
    );
    for (prefix, env) in env_layers {
        for (key, value) in env {
            if let EnvValue::Text(text) = value {
                templates.push((format!("{}.{}", prefix, key), text.as_str()));
            }
        }
    }

    let mut warnings = Vec::new();
    for (field, text) in templates {
        for name in Template::parse(text).placeholders() {
            if known.contains(&name) {
                continue;
            }
            warnings.push(ConfigWarning {
                key: name.to_string(),
                file: origin.to_path_buf(),
                line: find_line_number(content, &format!("{{{}}}", name)),
                suggestion: closest(name, &known),
                kind: WarningKind::UnknownPlaceholder {
                    field: field.clone(),
                },
            });
        }
    }
    warnings
}

fn resolve_options(raw: Vec<RawOption>) -> OneStartResult<Vec<OptionSpec>> {
    let mut seen = HashSet::new();
    let mut options = Vec::with_capacity(raw.len());

    for option in raw {
        if RESERVED_KEYS.contains(&option.name.as_str()) {
            return Err(OneStartError::ReservedOptionName { name: option.name });
        }
        if !seen.insert(option.name.clone()) {
            return Err(OneStartError::DuplicateOption { name: option.name });
        }
        if option.choices.is_empty() {
            return Err(OneStartError::EmptyOptionChoices { name: option.name });
        }

        options.push(OptionSpec {
            message: option.message.unwrap_or_else(|| option.name.clone()),
            name: option.name,
            choices: option.choices.into_iter().map(Choice::from).collect(),
            multiple: option.multiple,
            initial: option.initial,
            stages: option.stages,
        });
    }

    Ok(options)
}

fn env_spec(raw: indexmap::IndexMap<String, EnvValue>) -> EnvSpec {
    raw.into_iter()
        .map(|(key, value)| (key, value.into_resolvable()))
        .collect()
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "dev_command",
        "build_command",
        "upload_command",
        "build_dir",
        "build_html",
        "start_in_mode_menu",
        "on_build_failure",
        "hosts",
        "hooks",
        "before_start",
        "after_build",
        "common",
        "env",
        "stages",
        "description",
        "options",
        "name",
        "message",
        "choices",
        "multiple",
        "initial",
    ];

    closest(unknown, CANDIDATES)
}

/// Nearest candidate within two edits
fn closest(unknown: &str, candidates: &[&str]) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for &candidate in candidates {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
