//! Workflow contracts
//!
//! Missing configuration and missing artifacts are reported and skipped;
//! they never fail the run.

use std::path::Path;
use std::sync::Arc;

use tempfile::tempdir;

use crate::common::*;
use one_start::domain::ports::{ExtractSkip, WorkflowEvent};
use one_start::{
    Config, EnvMap, Hooks, Mode, RunContext, Session, SessionOutcome, Workflow, CONFIG_FILE_NAME,
};

fn react_config() -> Config {
    Config::from_toml_str(REACT_CONFIG, Path::new(CONFIG_FILE_NAME))
        .unwrap()
        .0
}

fn ctx(mode: Mode) -> RunContext {
    RunContext::builder().host("A").stage("testing").build(mode)
}

/// CONTRACT: upload without an upload command is a warning, not a failure
mod upload_without_command {
    use super::*;

    #[test]
    fn contract_no_subprocess_and_no_error() {
        let dir = tempdir().unwrap();
        let config = react_config();
        let ctx = ctx(Mode::Upload);
        let env = EnvMap::new();
        let runner = RecordingRunner::default();
        let sink = Arc::new(RecordingSink::default());

        let result = Workflow::new(&config, &ctx, &env, dir.path(), &runner)
            .with_events(sink.clone())
            .run(&mut ScriptedPrompter::default());

        assert!(result.is_ok());
        assert!(runner.commands().is_empty());
        assert!(sink.events().contains(&WorkflowEvent::UploadSkipped));
    }
}

/// CONTRACT: a missing build HTML names the exact path and skips the hook
mod missing_build_html {
    use super::*;

    #[test]
    fn contract_reports_resolved_path() {
        let dir = tempdir().unwrap();
        let config = react_config();
        let ctx = ctx(Mode::Extract);
        let env = EnvMap::new();
        let runner = RecordingRunner::default();
        let hook = CapturingAfterBuild::default();
        let hooks = Hooks::new().with_after_build(hook.clone());
        let sink = Arc::new(RecordingSink::default());

        let result = Workflow::new(&config, &ctx, &env, dir.path(), &runner)
            .with_hooks(&hooks)
            .with_events(sink.clone())
            .run(&mut ScriptedPrompter::default());

        assert!(result.is_ok());
        assert!(hook.calls.borrow().is_empty());
        let expected = dir.path().join("dist/A-testing").join("index.html");
        assert!(sink
            .events()
            .contains(&WorkflowEvent::ExtractSkipped(ExtractSkip::HtmlNotFound {
                path: expected,
            })));
    }
}

/// CONTRACT: a full session builds, then hands the built tags to `after_build`
mod session_end_to_end {
    use super::*;

    const BUILT: &str = r#"<!doctype html><html><head>
        <link rel="stylesheet" href="/static/css/main.css">
        </head><body><script src="/static/js/main.js"></script></body></html>"#;

    #[test]
    fn contract_build_mode_feeds_after_build() {
        let dir = tempdir().unwrap();
        write_build_html(dir.path(), "dist/B-production", BUILT);
        let config = react_config();
        let runner = RecordingRunner::default();
        let hook = CapturingAfterBuild::default();
        let hooks = Hooks::new().with_after_build(hook.clone());
        let mut prompter = ScriptedPrompter::new(&["B", "production", "build"]);

        let outcome = Session::new(&config, dir.path(), &runner, &hooks)
            .run(&mut prompter)
            .unwrap();

        let SessionOutcome::Completed { env, .. } = outcome else {
            panic!("expected a completed session");
        };
        assert_eq!(runner.commands(), vec!["react-scripts build"]);
        assert_eq!(runner.envs.borrow()[0], env);

        let calls = hook.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].ctx.host(), Some("B"));
        assert_eq!(calls[0].head.links[0]["href"], "/static/css/main.css");
        assert_eq!(calls[0].body.scripts[0]["src"], "/static/js/main.js");
    }

    #[test]
    fn contract_cancelled_post_build_menu_is_an_abort() {
        let dir = tempdir().unwrap();
        let config = react_config();
        let runner = RecordingRunner::default();
        let hooks = Hooks::new();
        let mut prompter = ScriptedPrompter::new(&["A", "testing", "buildOnly"]);

        let outcome = Session::new(&config, dir.path(), &runner, &hooks)
            .run(&mut prompter)
            .unwrap();

        assert_eq!(outcome, SessionOutcome::Aborted);
        assert_eq!(runner.commands(), vec!["react-scripts build"]);
    }
}
