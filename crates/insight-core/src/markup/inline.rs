//! Inline content: plain text interleaved with bold spans.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// `**text**`, matched lazily so adjacent pairs stay separate.
static BOLD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("BOLD_PATTERN regex is valid"));

/// A single inline segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum Inline {
    /// Literal text, including any unmatched asterisks.
    Text(String),
    /// Text that was wrapped in `**` markers.
    Bold(String),
}

/// The inline-markup-bearing content of a display node.
///
/// Text segments are never empty; bold segments may be (`****`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InlineContent(Vec<Inline>);

impl InlineContent {
    /// Rewrites every `**text**` occurrence in `line` into a bold span.
    ///
    /// Markers are not nested; an unterminated `**` is kept as literal text.
    pub fn parse(line: &str) -> Self {
        let mut segments = Vec::new();
        let mut last = 0;

        for captures in BOLD_PATTERN.captures_iter(line) {
            let (Some(whole), Some(inner)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            if whole.start() > last {
                segments.push(Inline::Text(line[last..whole.start()].to_string()));
            }
            segments.push(Inline::Bold(inner.as_str().to_string()));
            last = whole.end();
        }

        if last < line.len() {
            segments.push(Inline::Text(line[last..].to_string()));
        }

        Self(segments)
    }

    pub fn segments(&self) -> &[Inline] {
        &self.0
    }

    /// The literal text the line starts with, or `""` when it starts with a
    /// bold span.
    pub fn leading_text(&self) -> &str {
        match self.0.first() {
            Some(Inline::Text(text)) => text,
            _ => "",
        }
    }

    /// Drops the first `count` characters of the leading text segment.
    pub(crate) fn strip_leading_chars(mut self, count: usize) -> Self {
        if let Some(Inline::Text(text)) = self.0.first_mut() {
            let cut = text
                .char_indices()
                .nth(count)
                .map(|(idx, _)| idx)
                .unwrap_or(text.len());
            text.replace_range(..cut, "");
            if text.is_empty() {
                self.0.remove(0);
            }
        }
        self
    }

    /// True when the substituted line would be empty after trimming.
    ///
    /// A bold span always renders as markup, so it never counts as blank.
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|segment| match segment {
            Inline::Text(text) => text.trim().is_empty(),
            Inline::Bold(_) => false,
        })
    }

    /// Concatenated text with markers removed.
    pub fn to_plain_text(&self) -> String {
        self.0
            .iter()
            .map(|segment| match segment {
                Inline::Text(text) | Inline::Bold(text) => text.as_str(),
            })
            .collect()
    }

    /// HTML with text escaped; `<strong>` is the only tag emitted.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for segment in &self.0 {
            match segment {
                Inline::Text(text) => html.push_str(&html_escape(text)),
                Inline::Bold(text) => {
                    html.push_str("<strong>");
                    html.push_str(&html_escape(text));
                    html.push_str("</strong>");
                }
            }
        }
        html
    }
}

impl From<Vec<Inline>> for InlineContent {
    fn from(segments: Vec<Inline>) -> Self {
        Self(segments)
    }
}

/// Escape HTML special characters for safe embedding in HTML documents.
pub(crate) fn html_escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
