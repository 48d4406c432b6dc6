//! Selection contracts
//!
//! Prompts run host, stage, options, mode. Prompts with nothing to decide
//! are never shown.

use std::path::Path;

use crate::common::*;
use one_start::domain::services::{SelectionPipeline, SELECT_HOST, SELECT_MODE, SELECT_STAGE};
use one_start::{Config, ContextValue, Mode, CONFIG_FILE_NAME};

fn config(content: &str) -> Config {
    Config::from_toml_str(content, Path::new(CONFIG_FILE_NAME))
        .unwrap()
        .0
}

/// CONTRACT: prompts are asked in a fixed order
mod prompt_order {
    use super::*;

    #[test]
    fn contract_host_then_stage_then_mode() {
        let config = config(REACT_CONFIG);
        let mut prompter = ScriptedPrompter::new(&["B", "production", "buildOnly"]);

        let ctx = SelectionPipeline::new(&config, &mut prompter).run().unwrap();

        assert_eq!(prompter.messages(), vec![SELECT_HOST, SELECT_STAGE, SELECT_MODE]);
        assert_eq!(ctx.host(), Some("B"));
        assert_eq!(ctx.stage(), Some("production"));
        assert_eq!(ctx.mode(), Mode::BuildOnly);
    }

    #[test]
    fn contract_development_stage_never_asks_for_mode() {
        let config = config(REACT_CONFIG);
        let mut prompter = ScriptedPrompter::new(&["A", "development"]);

        let ctx = SelectionPipeline::new(&config, &mut prompter).run().unwrap();

        assert_eq!(prompter.messages(), vec![SELECT_HOST, SELECT_STAGE]);
        assert_eq!(ctx.mode(), Mode::Start);
    }
}

/// CONTRACT: one configured stage is selected without a prompt
mod single_stage {
    use super::*;

    #[test]
    fn contract_single_stage_is_not_prompted() {
        let config = config(
            r#"
            dev_command = "start"
            build_command = "build"

            [stages.testing.env]
            PUBLIC_URL = "/"
            "#,
        );
        let mut prompter = ScriptedPrompter::new(&["upload"]);

        let ctx = SelectionPipeline::new(&config, &mut prompter).run().unwrap();

        assert_eq!(prompter.messages(), vec![SELECT_MODE]);
        assert_eq!(ctx.stage(), Some("testing"));
        assert_eq!(ctx.host(), None);
    }
}

/// CONTRACT: options restricted to other stages are skipped and left unset
mod stage_restricted_options {
    use super::*;

    const WITH_OPTIONS: &str = r#"
        dev_command = "start"
        build_command = "build"

        [stages.development]
        [stages.testing]

        [[options]]
        name = "mock"
        message = "Use mock data"
        choices = ["yes", "no"]
        stages = ["development"]

        [[options]]
        name = "features"
        multiple = true
        choices = ["search", "chat", "maps"]
    "#;

    #[test]
    fn contract_option_for_other_stage_is_absent() {
        let config = config(WITH_OPTIONS);
        let mut prompter = ScriptedPrompter::new(&["testing"])
            .then_list(&["chat", "maps"])
            .then_text("extract");

        let ctx = SelectionPipeline::new(&config, &mut prompter).run().unwrap();

        assert!(!ctx.contains_key("mock"));
        assert!(!prompter.messages().contains(&"Use mock data"));
        assert_eq!(
            ctx.get("features"),
            Some(&ContextValue::from(vec!["chat".to_string(), "maps".to_string()]))
        );
    }

    #[test]
    fn contract_option_for_current_stage_is_asked() {
        let config = config(WITH_OPTIONS);
        let mut prompter = ScriptedPrompter::new(&["development", "yes"]).then_list(&["search"]);

        let ctx = SelectionPipeline::new(&config, &mut prompter).run().unwrap();

        assert_eq!(ctx.get("mock"), Some(&ContextValue::from("yes")));
        assert_eq!(ctx.mode(), Mode::Start);
        assert!(prompter.asked[2].multiple);
    }
}
