//! Line-oriented markdown-lite converter.
//!
//! Processing is a single pass over the lines of the input. The only state
//! carried between lines is the list currently being accumulated.

use super::inline::InlineContent;
use super::node::{HeadingLevel, Node};
use once_cell::sync::Lazy;
use regex::Regex;

/// A literal `*` or `-` followed by whitespace.
static LIST_ITEM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\*|-)\s").expect("LIST_ITEM_PATTERN regex is valid"));

/// Heading prefixes in priority order.
const HEADING_PREFIXES: [(&str, HeadingLevel); 3] = [
    ("### ", HeadingLevel::H3),
    ("## ", HeadingLevel::H2),
    ("# ", HeadingLevel::H1),
];

/// Collects consecutive list items until a non-list line arrives.
#[derive(Default)]
struct ListAccumulator {
    items: Vec<InlineContent>,
}

impl ListAccumulator {
    fn push(&mut self, item: InlineContent) {
        self.items.push(item);
    }

    fn flush_into(&mut self, nodes: &mut Vec<Node>) {
        if !self.items.is_empty() {
            nodes.push(Node::List {
                items: std::mem::take(&mut self.items),
            });
        }
    }
}

/// Converts a block of text into display nodes.
///
/// Never fails: any input yields zero or more nodes.
///
/// # Examples
///
/// ```
/// use insight_core::markup::{convert, NodeKind};
///
/// let nodes = convert("- a\n- b\nc");
/// assert_eq!(nodes.len(), 2);
/// assert_eq!(nodes[0].kind(), NodeKind::List);
/// assert_eq!(nodes[1].kind(), NodeKind::Paragraph);
/// ```
pub fn convert(text: &str) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut list = ListAccumulator::default();

    for line in text.lines() {
        let content = InlineContent::parse(line);
        let leading = content.leading_text();

        if let Some((prefix, level)) = HEADING_PREFIXES
            .iter()
            .find(|(prefix, _)| leading.starts_with(prefix))
        {
            list.flush_into(&mut nodes);
            nodes.push(Node::Heading {
                level: *level,
                content: content.strip_leading_chars(prefix.chars().count()),
            });
        } else if LIST_ITEM_PATTERN.is_match(leading) {
            list.push(content.strip_leading_chars(2));
        } else {
            list.flush_into(&mut nodes);
            if !content.is_blank() {
                nodes.push(Node::Paragraph { content });
            }
        }
    }

    list.flush_into(&mut nodes);
    nodes
}
