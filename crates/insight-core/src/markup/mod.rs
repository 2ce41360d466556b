//! Markdown-lite markup.
//!
//! Supports exactly three conventions: `#`/`##`/`###` headings, `*`/`-`
//! unordered list items, and `**bold**` spans. There is no nesting and no
//! escaping syntax.
//!
//! # Module Structure
//!
//! - `inline`: bold-span substitution (`Inline`, `InlineContent`)
//! - `node`: display node types (`Node`, `HeadingLevel`, `NodeKind`)
//! - `converter`: the line-by-line converter (`convert`)
//! - `render`: HTML and plain-text rendering

mod converter;
mod inline;
mod node;
pub mod render;

pub use converter::convert;
pub use inline::{Inline, InlineContent};
pub use node::{HeadingLevel, Node, NodeKind};
