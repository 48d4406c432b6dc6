//! Attribute codec
//!
//! Renders a [`TagAttribute`] map back into markup. Attribute order follows
//! the map; an empty value renders as a bare (boolean) attribute. The `code`
//! key is never rendered as an attribute: it becomes the text content of
//! `script` and `style` and is dropped for `link` and `meta`.

use crate::domain::value_objects::{TagAttribute, TagKind, CODE_KEY};

/// Render one tag of the given kind
pub fn encode(kind: TagKind, attrs: &TagAttribute) -> String {
    let attributes = render_attributes(attrs);
    let name = kind.as_str();
    if kind.carries_code() {
        let code = attrs.get(CODE_KEY).map(String::as_str).unwrap_or_default();
        format!("<{name}{attributes}>{code}</{name}>")
    } else {
        format!("<{name}{attributes}/>")
    }
}

fn render_attributes(attrs: &TagAttribute) -> String {
    let mut out = String::new();
    for (key, value) in attrs.iter().filter(|(k, _)| k.as_str() != CODE_KEY) {
        out.push(' ');
        out.push_str(key);
        if !value.is_empty() {
            out.push_str("=\"");
            push_escaped(&mut out, value);
            out.push('"');
        }
    }
    out
}

// Parsers decode these back, so extracted values survive a round trip.
fn push_escaped(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

/// Encoders bound to their tag kind, handed to the `after_build` hook
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagCodec;

impl TagCodec {
    pub fn create_link(&self, attrs: &TagAttribute) -> String {
        encode(TagKind::Link, attrs)
    }

    pub fn create_script(&self, attrs: &TagAttribute) -> String {
        encode(TagKind::Script, attrs)
    }

    pub fn create_style(&self, attrs: &TagAttribute) -> String {
        encode(TagKind::Style, attrs)
    }

    pub fn create_meta(&self, attrs: &TagAttribute) -> String {
        encode(TagKind::Meta, attrs)
    }
}
