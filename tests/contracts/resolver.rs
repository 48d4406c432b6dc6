//! Environment resolution contracts
//!
//! The stage layer wins over `common`, and `{placeholder}` values are
//! computed from the final run context.

use std::path::Path;

use crate::common::*;
use one_start::{build_env, Config, Mode, RunContext, CONFIG_FILE_NAME};

fn react_config() -> Config {
    Config::from_toml_str(REACT_CONFIG, Path::new(CONFIG_FILE_NAME))
        .unwrap()
        .0
}

fn resolve(config: &Config, ctx: &RunContext) -> one_start::EnvMap {
    build_env(Some(&config.common_env), config.stage_env(ctx.stage()), ctx)
}

/// CONTRACT: a key set by both layers takes the stage's value
mod layering {
    use super::*;

    #[test]
    fn contract_stage_overrides_common() {
        let config = react_config();
        let ctx = RunContext::builder()
            .host("A")
            .stage("development")
            .build(Mode::Start);

        let env = resolve(&config, &ctx);

        assert_eq!(env.get("PORT"), Some("3456"));
    }

    #[test]
    fn contract_common_applies_when_stage_is_silent() {
        let config = react_config();
        let ctx = RunContext::builder()
            .host("A")
            .stage("testing")
            .build(Mode::Build);

        let env = resolve(&config, &ctx);

        assert_eq!(env.get("PORT"), Some("3000"));
        assert_eq!(env.get("PUBLIC_URL"), Some("http://your-test-env.domain.com/"));
    }
}

/// CONTRACT: computed values see host and stage of this run
mod computed_values {
    use super::*;

    #[test]
    fn contract_placeholders_follow_selection() {
        let config = react_config();
        let ctx = RunContext::builder()
            .host("B")
            .stage("production")
            .build(Mode::Build);

        let env = resolve(&config, &ctx);

        assert_eq!(env.get("BUILD_PATH"), Some("dist/B-production"));
        assert_eq!(env.get("PUBLIC_URL"), Some("https://cdn.domain.com/B/"));
        assert_eq!(config.build_dir.resolve(&ctx).as_deref(), Some("dist/B-production"));
    }
}
