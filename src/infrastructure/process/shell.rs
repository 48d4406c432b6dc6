//! Shell Command Runner
//!
//! Runs command strings through the platform shell (`sh -c` / `cmd /C`)
//! so config commands can use pipes, `&&` and `${VAR}` expansion.

use std::io::{self, Write};
use std::process::{Child, Command, Stdio};

use crate::domain::ports::{CommandError, CommandRunner, CommandSpec};

/// Runs commands through the system shell with inherited stdout/stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellCommandRunner;

impl ShellCommandRunner {
    pub fn new() -> Self {
        Self
    }

    fn shell_command(command: &str) -> Command {
        if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(command);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(command);
            cmd
        }
    }
}

impl CommandRunner for ShellCommandRunner {
    fn run(&self, spec: &CommandSpec<'_>) -> Result<(), CommandError> {
        tracing::debug!(
            command = spec.command,
            cwd = %spec.cwd.display(),
            env_vars = spec.env.len(),
            "running command"
        );

        let mut cmd = Self::shell_command(spec.command);
        cmd.current_dir(spec.cwd)
            .envs(spec.env.iter())
            .stdin(if spec.stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::inherit()
            });

        let mut child = cmd.spawn().map_err(|source| CommandError::Spawn {
            command: spec.command.to_string(),
            source,
        })?;

        // stdin is closed when the arm ends, so the child sees EOF
        let written = match (spec.stdin, child.stdin.take()) {
            (Some(input), Some(mut stdin)) => stdin.write_all(input),
            _ => Ok(()),
        };

        reap(spec.command, &mut child, written)
    }
}

/// Wait for `child`, then report the stdin write or the exit status.
///
/// The child is waited on even when writing its stdin failed.
fn reap(command: &str, child: &mut Child, written: io::Result<()>) -> Result<(), CommandError> {
    let status = child.wait().map_err(|source| CommandError::Spawn {
        command: command.to_string(),
        source,
    })?;

    if let Err(source) = written {
        // children may exit without reading stdin; the exit status decides
        if source.kind() != io::ErrorKind::BrokenPipe {
            return Err(CommandError::Stdin {
                command: command.to_string(),
                source,
            });
        }
    }

    if status.success() {
        Ok(())
    } else {
        Err(CommandError::Failed {
            command: command.to_string(),
            code: status.code(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::domain::services::EnvMap;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn passes_env_and_cwd() {
        let dir = tempdir().unwrap();
        let mut env = EnvMap::new();
        env.insert("ONE_START_TEST_PORT", "3456");

        ShellCommandRunner::new()
            .run(&CommandSpec::new(
                "printf %s \"$ONE_START_TEST_PORT\" > port.txt",
                &env,
                dir.path(),
            ))
            .unwrap();

        let written = fs::read_to_string(dir.path().join("port.txt")).unwrap();
        assert_eq!(written, "3456");
    }

    #[test]
    fn pipes_stdin() {
        let dir = tempdir().unwrap();
        let env = EnvMap::new();

        ShellCommandRunner::new()
            .run(&CommandSpec::new("cat > payload.json", &env, dir.path()).with_stdin(b"{\"a\":1}"))
            .unwrap();

        let written = fs::read_to_string(dir.path().join("payload.json")).unwrap();
        assert_eq!(written, "{\"a\":1}");
    }

    #[test]
    fn failed_stdin_write_still_waits_for_child() {
        let mut child = Command::new("sh")
            .arg("-c")
            .arg("sleep 1")
            .spawn()
            .unwrap();
        let written = Err(io::Error::new(io::ErrorKind::Other, "disk full"));

        let err = reap("sleep 1", &mut child, written).unwrap_err();

        assert!(matches!(err, CommandError::Stdin { .. }));
        assert!(child.try_wait().unwrap().is_some());
    }

    #[test]
    fn broken_pipe_defers_to_exit_status() {
        let mut child = Command::new("sh").arg("-c").arg("exit 0").spawn().unwrap();
        let written = Err(io::Error::from(io::ErrorKind::BrokenPipe));

        reap("exit 0", &mut child, written).unwrap();
    }

    #[test]
    fn non_zero_exit_is_failure() {
        let dir = tempdir().unwrap();
        let env = EnvMap::new();

        let err = ShellCommandRunner::new()
            .run(&CommandSpec::new("exit 3", &env, dir.path()))
            .unwrap_err();

        assert!(matches!(err, CommandError::Failed { code: Some(3), .. }));
    }
}
