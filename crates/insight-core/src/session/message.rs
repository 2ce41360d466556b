//! Chat message types.
//!
//! This module contains types for representing messages in the chat panel,
//! including roles and message content.

use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Message typed by the user.
    User,
    /// Message produced by the generation service (or the error fallback).
    Assistant,
}

/// A single message in the session log.
///
/// Messages are immutable once created; the log only ever appends them or
/// drops all of them at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique identifier (UUID v4).
    pub id: String,
    /// The role of the message sender.
    pub role: MessageRole,
    /// Raw content, markdown-lite for assistant messages.
    pub content: String,
    /// Local wall-clock time for display, e.g. `14:05`.
    pub timestamp: String,
}

impl ChatMessage {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Local::now().format("%H:%M").to_string(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    pub fn is_assistant(&self) -> bool {
        self.role == MessageRole::Assistant
    }
}
