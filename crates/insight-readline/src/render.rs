//! Terminal rendering of chat messages.

use colored::Colorize;
use insight_core::markup::{HeadingLevel, Inline, InlineContent, Node, convert};
use insight_core::session::{ChatMessage, MessageRole};

/// Renders one message: a coloured header line followed by the body.
///
/// User messages are shown verbatim; assistant messages go through the
/// markup converter.
pub fn render_message(message: &ChatMessage) -> String {
    let mut out = String::new();
    match message.role {
        MessageRole::User => {
            out.push_str(&format!("{} {}\n", "You".green().bold(), message.timestamp.bright_black()));
            for line in message.content.lines() {
                out.push_str(&format!("  {}\n", line.green()));
            }
        }
        MessageRole::Assistant => {
            out.push_str(&format!(
                "{} {}\n",
                "Insight".bright_blue().bold(),
                message.timestamp.bright_black()
            ));
            out.push_str(&render_nodes(&convert(&message.content)));
        }
    }
    out
}

pub fn render_nodes(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            Node::Heading { level, content } => {
                let text = render_inline(content);
                let styled = match level {
                    HeadingLevel::H1 => text.bright_magenta().bold().underline(),
                    HeadingLevel::H2 => text.magenta().bold(),
                    HeadingLevel::H3 => text.cyan().bold(),
                };
                out.push_str(&format!("  {}\n", styled));
            }
            Node::List { items } => {
                for item in items {
                    out.push_str(&format!("    • {}\n", render_inline(item)));
                }
            }
            Node::Paragraph { content } => {
                out.push_str(&format!("  {}\n", render_inline(content)));
            }
        }
    }
    out
}

fn render_inline(content: &InlineContent) -> String {
    content
        .segments()
        .iter()
        .map(|segment| match segment {
            Inline::Text(text) => text.clone(),
            Inline::Bold(text) => text.bold().to_string(),
        })
        .collect()
}
