//! Rich text as stored by the CMS ("portable text").
//!
//! A document is a flat list of blocks. Text blocks carry a `style`
//! (`normal`, `h1`..`h6`, `blockquote`), an optional `listItem` and a list of
//! spans. Link annotations live in `markDefs` and are referenced from a span's
//! `marks` by key. Block and child types we do not know are kept as
//! `Unsupported` so one custom block never fails a whole page.

use serde::{Deserialize, Serialize};

pub type PortableText = Vec<PortableBlock>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub enum PortableBlock {
    #[serde(rename = "block")]
    Text(TextBlock),
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    #[serde(rename = "_key", default)]
    pub key: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub list_item: Option<ListKind>,
    #[serde(default)]
    pub level: Option<u8>,
    #[serde(default)]
    pub mark_defs: Vec<MarkDef>,
    #[serde(default)]
    pub children: Vec<Inline>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Bullet,
    Number,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkDef {
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(rename = "_type")]
    pub kind: String,
    #[serde(default)]
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub enum Inline {
    #[serde(rename = "span")]
    Span(Span),
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Span {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub marks: Vec<String>,
}

/// Block level style after defaulting; unknown styles render as paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStyle {
    Normal,
    Heading(u8),
    Blockquote,
}

impl TextBlock {
    pub fn block_style(&self) -> BlockStyle {
        match self.style.as_deref() {
            Some("blockquote") => BlockStyle::Blockquote,
            Some(s) if s.len() == 2 && s.starts_with('h') => match s[1..].parse::<u8>() {
                Ok(n @ 1..=6) => BlockStyle::Heading(n),
                _ => BlockStyle::Normal,
            },
            _ => BlockStyle::Normal,
        }
    }

    pub fn spans(&self) -> impl Iterator<Item = &Span> {
        self.children.iter().filter_map(|c| match c {
            Inline::Span(span) => Some(span),
            Inline::Unsupported => None,
        })
    }

    pub fn link_for(&self, mark: &str) -> Option<&str> {
        self.mark_defs
            .iter()
            .find(|d| d.key == mark && d.kind == "link")
            .and_then(|d| d.href.as_deref())
    }

    pub fn text(&self) -> String {
        self.spans().map(|s| s.text.as_str()).collect()
    }
}

/// Text of the first span of the first block, if that is non-empty.
pub fn first_text(blocks: &[PortableBlock]) -> Option<&str> {
    match blocks.first()? {
        PortableBlock::Text(block) => match block.children.first()? {
            Inline::Span(span) if !span.text.is_empty() => Some(span.text.as_str()),
            _ => None,
        },
        PortableBlock::Unsupported => None,
    }
}

pub fn plain_text(blocks: &[PortableBlock]) -> String {
    blocks
        .iter()
        .filter_map(|b| match b {
            PortableBlock::Text(block) => Some(block.text()),
            PortableBlock::Unsupported => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}
