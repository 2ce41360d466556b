//! The session log.

use super::message::ChatMessage;
use serde::{Deserialize, Serialize};

/// Ordered, chronological list of every message exchanged in the chat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionLog {
    #[serde(default)]
    messages: Vec<ChatMessage>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl From<Vec<ChatMessage>> for SessionLog {
    fn from(messages: Vec<ChatMessage>) -> Self {
        Self { messages }
    }
}
