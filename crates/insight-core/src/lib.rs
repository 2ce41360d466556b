//! Domain core of Insight Chat.
//!
//! - [`markup`] converts markdown-lite model output into display nodes
//! - [`session`] holds the chat log and drives request/response round trips
//! - [`prompt`] composes prompts from caller-supplied context blocks
//! - [`generation`] is the seam to the external text-generation service

pub mod config;
pub mod error;
pub mod generation;
pub mod markup;
pub mod prompt;
pub mod session;

// Re-export common error type
pub use error::InsightError;
