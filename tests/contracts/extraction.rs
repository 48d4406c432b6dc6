//! Extraction contracts
//!
//! The tag data handed to `after_build` is a faithful, ordered view of the
//! built document and can be turned back into markup.

use one_start::domain::value_objects::TagKind;
use one_start::{encode, extract, TagAttribute, TagCodec};

fn attrs(pairs: &[(&str, &str)]) -> TagAttribute {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// CONTRACT: the reference document splits into the expected sections
mod reference_document {
    use super::*;

    #[test]
    fn contract_reference_document() {
        let html = r#"<head><meta charset="utf-8"><script>var x=1;</script></head><body><link rel="x"></body>"#;

        let extraction = extract(html);

        assert_eq!(extraction.head.metas, vec![attrs(&[("charset", "utf-8")])]);
        assert_eq!(extraction.head.scripts, vec![attrs(&[("code", "var x=1;")])]);
        assert_eq!(extraction.body.links, vec![attrs(&[("rel", "x")])]);
        assert!(extraction.head.links.is_empty());
        assert!(extraction.head.styles.is_empty());
        assert!(extraction.body.scripts.is_empty());
        assert!(extraction.body.styles.is_empty());
    }

    #[test]
    fn contract_document_order_is_kept() {
        let html = r#"<html><head>
            <script src="/a.js"></script>
            <script src="/b.js" defer></script>
            </head><body><script src="/c.js"></script></body></html>"#;

        let extraction = extract(html);

        let srcs: Vec<&str> = extraction
            .head
            .scripts
            .iter()
            .map(|s| s["src"].as_str())
            .collect();
        assert_eq!(srcs, vec!["/a.js", "/b.js"]);
        assert_eq!(extraction.head.scripts[1].get("defer").map(String::as_str), Some(""));
        assert_eq!(extraction.body.scripts[0]["src"], "/c.js");
    }
}

/// CONTRACT: extracted link and meta tags re-encode to equivalent markup
mod round_trip {
    use super::*;

    #[test]
    fn contract_link_survives_encode_and_extract() {
        let link = attrs(&[
            ("rel", "preload"),
            ("href", "/static/a&b.css"),
            ("crossorigin", ""),
        ]);
        let html = format!("<html><head>{}</head><body></body></html>", encode(TagKind::Link, &link));

        let extraction = extract(&html);

        assert_eq!(extraction.head.links, vec![link]);
    }

    #[test]
    fn contract_inline_code_becomes_text_content() {
        let script = attrs(&[("type", "module"), ("code", "console.log(1)")]);
        assert_eq!(
            TagCodec.create_script(&script),
            r#"<script type="module">console.log(1)</script>"#
        );
        assert_eq!(
            TagCodec.create_meta(&attrs(&[("name", "viewport"), ("code", "x")])),
            r#"<meta name="viewport"/>"#
        );
    }
}
