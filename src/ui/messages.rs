//! English message catalog for console output

pub const START_DEV: &str = "Start Dev Server...";
pub const START_BUILD: &str = "Start Building...";
pub const BUILD_SUCCESS: &str = "Build Success!";
pub const START_UPLOAD: &str = "Start Uploading";
pub const UPLOAD_DONE: &str = "Upload finished";
pub const UPLOAD_COMMAND_NOT_FOUND: &str = "Miss upload_command config.";
pub const AFTER_BUILD_NOT_FOUND: &str = "Miss after_build config.";
pub const BUILD_DIR_NOT_FOUND: &str = "Miss build_dir config.";
pub const ABORTED: &str = "Aborted.";
pub const EXIT: &str = "Bye.";
pub const NOT_INTERACTIVE: &str =
    "one-start needs an interactive terminal to ask for host, stage and mode.";

pub fn build_html_not_found(path: &str) -> String {
    format!("{} is not exist!", path)
}

pub fn mode_selected(mode: &str) -> String {
    format!("Mode: {}", mode)
}

pub fn build_failed(error: &str, aborting: bool) -> String {
    if aborting {
        format!("Build failed, stopping: {}", error)
    } else {
        format!("Build failed, continuing: {}", error)
    }
}

pub fn extracted(tag_count: usize, path: &str) -> String {
    format!("Extracted {} tags from {}", tag_count, path)
}

pub fn unknown_config_key(key: &str, location: &str) -> String {
    format!("Unknown config key '{}' in {}", key, location)
}

pub fn unknown_placeholder(name: &str, field: &str, location: &str) -> String {
    format!("Unknown placeholder '{{{}}}' in {} ({})", name, field, location)
}

pub fn literal_braces_hint(name: &str) -> String {
    format!("It renders empty. Write '{{{{{}}}}}' for literal braces.", name)
}

pub fn interrupted(command: &str) -> String {
    format!("Interrupted during '{}', stopping.", command)
}

pub fn hook_failed(hook: &str, error: &str) -> String {
    format!("{} hook failed: {}", hook, error)
}
