//! Rendering of converted nodes.

use super::node::Node;

/// Renders nodes as HTML.
///
/// All text is escaped, so the output can be injected into a page even when
/// the source text came from an untrusted model response. `<strong>` is the
/// only inline tag produced.
pub fn to_html(nodes: &[Node]) -> String {
    let mut html = String::new();
    for node in nodes {
        match node {
            Node::Heading { level, content } => {
                let n = level.as_u8();
                html.push_str(&format!("<h{n}>{}</h{n}>", content.to_html()));
            }
            Node::List { items } => {
                html.push_str("<ul>");
                for item in items {
                    html.push_str("<li>");
                    html.push_str(&item.to_html());
                    html.push_str("</li>");
                }
                html.push_str("</ul>");
            }
            Node::Paragraph { content } => {
                html.push_str("<p>");
                html.push_str(&content.to_html());
                html.push_str("</p>");
            }
        }
    }
    html
}

/// Flattens nodes to plain text, one block per line.
pub fn to_plain_text(nodes: &[Node]) -> String {
    let mut lines = Vec::new();
    for node in nodes {
        match node {
            Node::Heading { content, .. } | Node::Paragraph { content } => {
                lines.push(content.to_plain_text());
            }
            Node::List { items } => {
                lines.extend(items.iter().map(|item| format!("- {}", item.to_plain_text())));
            }
        }
    }
    lines.join("\n")
}
