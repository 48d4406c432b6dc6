//! Runs the built binary without a terminal attached.

use std::fs;
use std::process::{Command, Output, Stdio};

use tempfile::tempdir;

fn run_in(dir: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_one-start"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .output()
        .unwrap()
}

#[test]
fn test_missing_config_fails_with_hint() {
    let dir = tempdir().unwrap();

    let output = run_in(dir.path(), &[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("one-start.toml"),
        "expected config hint; got:\n{}",
        stderr
    );
}

#[test]
fn test_non_interactive_run_exits_cleanly_with_warnings() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("one-start.toml"),
        "dev_command = \"start\"\nbuild_command = \"build\"\nbuld_dir = \"dist\"\n",
    )
    .unwrap();

    let output = run_in(dir.path(), &[]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown config key 'buld_dir'"), "got:\n{}", stderr);
    assert!(stderr.contains("Did you mean 'build_dir'?"), "got:\n{}", stderr);
}

#[test]
fn test_config_flag_points_elsewhere() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("conf")).unwrap();
    fs::write(
        dir.path().join("conf/deploy.toml"),
        "dev_command = \"start\"\nbuild_command = \"build\"\n",
    )
    .unwrap();

    let output = run_in(dir.path(), &["--config", "conf/deploy.toml"]);

    assert!(output.status.success(), "stderr:\n{}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn test_help_mentions_config_file() {
    let dir = tempdir().unwrap();

    let output = run_in(dir.path(), &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("one-start.toml"));
}
