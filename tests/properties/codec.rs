//! Property tests for the attribute codec and the extractor.

use proptest::prelude::*;

use one_start::domain::value_objects::TagKind;
use one_start::{encode, extract, TagAttribute};

fn attribute_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9-]{0,8}")
        .unwrap()
        .prop_filter("code is reserved", |name| name != "code")
}

fn attribute_value() -> impl Strategy<Value = String> {
    // Printable ASCII; quotes and ampersands exercise escaping.
    proptest::string::string_regex("[ -~]{0,24}").unwrap()
}

fn attribute_map() -> impl Strategy<Value = TagAttribute> {
    proptest::collection::vec((attribute_name(), attribute_value()), 0..6)
        .prop_map(|pairs| pairs.into_iter().collect::<TagAttribute>())
}

fn embed_in_head(tag: &str) -> String {
    format!("<!doctype html><html><head>{tag}</head><body></body></html>")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a link without `code` survives encode then extract unchanged.
    #[test]
    fn property_link_round_trip(attrs in attribute_map()) {
        let html = embed_in_head(&encode(TagKind::Link, &attrs));
        let extraction = extract(&html);
        prop_assert_eq!(extraction.head.links, vec![attrs]);
    }

    /// PROPERTY: a meta without `code` survives encode then extract unchanged.
    #[test]
    fn property_meta_round_trip(attrs in attribute_map()) {
        let html = embed_in_head(&encode(TagKind::Meta, &attrs));
        let extraction = extract(&html);
        prop_assert_eq!(extraction.head.metas, vec![attrs]);
    }

    /// PROPERTY: extraction never panics, whatever the input.
    #[test]
    fn property_extract_never_panics(html in "\\PC{0,200}") {
        let _ = extract(&html);
    }

    /// PROPERTY: an encoded tag always opens with its own name.
    #[test]
    fn property_encode_starts_with_tag_name(attrs in attribute_map()) {
        for kind in [TagKind::Meta, TagKind::Link, TagKind::Script, TagKind::Style] {
            let tag = encode(kind, &attrs);
            let prefix = format!("<{}", kind.as_str());
            prop_assert!(tag.starts_with(&prefix));
        }
    }
}
