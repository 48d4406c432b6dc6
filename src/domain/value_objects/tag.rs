//! Tag model for extracted HTML assets
//!
//! Attribute maps keep document order so tags can be re-emitted in a stable
//! way. The reserved `code` key carries the inline text of `script`/`style`.

use indexmap::IndexMap;
use serde::Serialize;

/// Key holding the inline text of a `script` or `style` element
pub const CODE_KEY: &str = "code";

/// Attribute name to value, in document order
pub type TagAttribute = IndexMap<String, String>;

/// Kinds of element the extractor collects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Meta,
    Link,
    Script,
    Style,
}

impl TagKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagKind::Meta => "meta",
            TagKind::Link => "link",
            TagKind::Script => "script",
            TagKind::Style => "style",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "meta" => Some(TagKind::Meta),
            "link" => Some(TagKind::Link),
            "script" => Some(TagKind::Script),
            "style" => Some(TagKind::Style),
            _ => None,
        }
    }

    /// Whether the element's text content travels in the `code` key
    pub fn carries_code(&self) -> bool {
        matches!(self, TagKind::Script | TagKind::Style)
    }
}

/// Tags found under `<head>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeadTags {
    pub metas: Vec<TagAttribute>,
    pub links: Vec<TagAttribute>,
    pub scripts: Vec<TagAttribute>,
    pub styles: Vec<TagAttribute>,
}

impl HeadTags {
    pub fn is_empty(&self) -> bool {
        self.metas.is_empty()
            && self.links.is_empty()
            && self.scripts.is_empty()
            && self.styles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.metas.len() + self.links.len() + self.scripts.len() + self.styles.len()
    }
}

/// Tags found under `<body>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BodyTags {
    pub links: Vec<TagAttribute>,
    pub scripts: Vec<TagAttribute>,
    pub styles: Vec<TagAttribute>,
}

impl BodyTags {
    pub fn is_empty(&self) -> bool {
        self.links.is_empty() && self.scripts.is_empty() && self.styles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.links.len() + self.scripts.len() + self.styles.len()
    }
}

/// Result of scanning a built HTML document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    pub head: HeadTags,
    pub body: BodyTags,
}

impl Extraction {
    pub fn tag_count(&self) -> usize {
        self.head.len() + self.body.len()
    }
}
