//! HTML tag extractor
//!
//! Parses a document with the html5ever tree builder (which never fails on
//! malformed input) and collects `meta`/`link`/`script`/`style` elements
//! found under `<head>` and `<body>`, in document order.
//!
//! A source attribute literally named `code` is dropped: that key only ever
//! holds the inline text of `script`/`style`.

use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, Attribute, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::domain::value_objects::{Extraction, TagAttribute, TagKind, CODE_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Head,
    Body,
}

/// Extract asset tags from a complete HTML document
pub fn extract(html: &str) -> Extraction {
    let dom = parse_document(RcDom::default(), ParseOpts::default()).one(html);
    let mut extraction = Extraction::default();
    walk(&dom.document, None, &mut extraction);
    tracing::debug!(
        head = extraction.head.len(),
        body = extraction.body.len(),
        "extracted tags"
    );
    extraction
}

fn walk(node: &Handle, section: Option<Section>, out: &mut Extraction) {
    for child in node.children.borrow().iter() {
        let mut child_section = section;
        if let NodeData::Element { name, attrs, .. } = &child.data {
            let local: &str = &name.local;
            match local {
                "head" => child_section = Some(Section::Head),
                "body" => child_section = Some(Section::Body),
                _ => {}
            }
            if let (Some(section), Some(kind)) = (section, TagKind::from_name(local)) {
                let tag = decode(kind, &attrs.borrow(), child);
                push(out, section, kind, tag);
            }
        }
        walk(child, child_section, out);
    }
}

fn decode(kind: TagKind, attrs: &[Attribute], node: &Handle) -> TagAttribute {
    let mut tag: TagAttribute = attrs
        .iter()
        .map(|attr| (attribute_name(attr), attr.value.to_string()))
        .filter(|(name, _)| name != CODE_KEY)
        .collect();

    if kind.carries_code() {
        let children = node.children.borrow();
        if !children.is_empty() {
            let code = children
                .iter()
                .filter_map(|c| match &c.data {
                    NodeData::Text { contents } => Some(contents.borrow().to_string()),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join("\n");
            tag.insert(CODE_KEY.to_string(), code);
        }
    }

    tag
}

fn attribute_name(attr: &Attribute) -> String {
    match &attr.name.prefix {
        Some(prefix) => format!("{}:{}", prefix, attr.name.local),
        None => attr.name.local.to_string(),
    }
}

fn push(out: &mut Extraction, section: Section, kind: TagKind, tag: TagAttribute) {
    let list = match (section, kind) {
        (Section::Head, TagKind::Meta) => &mut out.head.metas,
        (Section::Head, TagKind::Link) => &mut out.head.links,
        (Section::Head, TagKind::Script) => &mut out.head.scripts,
        (Section::Head, TagKind::Style) => &mut out.head.styles,
        // metas are only collected from the head
        (Section::Body, TagKind::Meta) => return,
        (Section::Body, TagKind::Link) => &mut out.body.links,
        (Section::Body, TagKind::Script) => &mut out.body.scripts,
        (Section::Body, TagKind::Style) => &mut out.body.styles,
    };
    list.push(tag);
}
