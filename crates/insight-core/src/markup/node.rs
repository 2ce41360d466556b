//! Display node types produced by the converter.

use super::inline::InlineContent;
use serde::{Deserialize, Serialize};

/// Heading depth. Only the three levels the converter recognises exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    pub fn as_u8(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

/// Semantic kind of a node, without its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Heading1,
    Heading2,
    Heading3,
    List,
    Paragraph,
}

/// A single block of converted output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Heading {
        level: HeadingLevel,
        content: InlineContent,
    },
    /// An unordered list built from consecutive `* ` / `- ` lines.
    List { items: Vec<InlineContent> },
    Paragraph { content: InlineContent },
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Heading { level, .. } => match level {
                HeadingLevel::H1 => NodeKind::Heading1,
                HeadingLevel::H2 => NodeKind::Heading2,
                HeadingLevel::H3 => NodeKind::Heading3,
            },
            Node::List { .. } => NodeKind::List,
            Node::Paragraph { .. } => NodeKind::Paragraph,
        }
    }
}
