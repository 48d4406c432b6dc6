//! Property tests for `{placeholder}` templates.

use proptest::prelude::*;

use one_start::domain::services::Template;
use one_start::{Mode, RunContext};

fn context() -> RunContext {
    RunContext::builder()
        .host("A")
        .stage("testing")
        .build(Mode::Build)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing and rendering never panic on arbitrary text.
    #[test]
    fn property_template_never_panics(source in "\\PC{0,80}") {
        let template = Template::parse(&source);
        let _ = template.render(&context());
    }

    /// PROPERTY: text without braces renders unchanged.
    #[test]
    fn property_plain_text_is_identity(source in "[^{}]{0,80}") {
        let template = Template::parse(&source);
        prop_assert!(!template.has_placeholders());
        prop_assert_eq!(template.render(&context()), source);
    }
}
