//! Configuration model.
//!
//! Loaded from `config.toml` by `insight-infrastructure`. Every section and
//! field has a default, so an empty or missing file is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_STORAGE_KEY: &str = "performance-chat-history";
pub const DEFAULT_ERROR_MESSAGE: &str =
    "Sorry, I encountered an error while analyzing the data. Please try again.";
pub const DEFAULT_FALLBACK_MESSAGE: &str =
    "I couldn't generate a response. Please try rephrasing your question.";
pub const DEFAULT_CLEAR_CONFIRMATION: &str = "Clear chat history?";

/// Root of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct InsightConfig {
    pub chat: ChatConfig,
    pub service: ServiceConfig,
    pub storage: StorageConfig,
}

/// Behaviour of the chat controller.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ChatConfig {
    /// Model identifier passed to the generation service.
    pub model: String,
    /// Shown as the assistant reply when the generation call fails.
    pub error_message: String,
    /// Shown as the assistant reply when the service returns no text.
    pub fallback_message: String,
    /// Question asked before the history is cleared.
    pub clear_confirmation: String,
    /// Overrides the built-in prompt template (minijinja syntax).
    pub prompt_template: Option<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            error_message: DEFAULT_ERROR_MESSAGE.to_string(),
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
            clear_confirmation: DEFAULT_CLEAR_CONFIRMATION.to_string(),
            prompt_template: None,
        }
    }
}

/// Connection settings for the generation service.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ServiceConfig {
    /// API key. Usually supplied through `secret.json` or `GEMINI_API_KEY`
    /// rather than `config.toml`.
    pub api_key: Option<String>,
    /// Overrides the REST endpoint, e.g. for a proxy.
    pub base_url: Option<String>,
    /// HTTP timeout for a single generation call.
    pub timeout_secs: Option<u64>,
}

impl ServiceConfig {
    /// The service counts as configured once a non-blank API key is present.
    pub fn is_configured(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}

/// Where the session log lives.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct StorageConfig {
    /// Fixed key the log is stored under.
    pub storage_key: String,
    /// Directory for the log file; defaults to the platform data directory.
    pub directory: Option<PathBuf>,
    /// When false the log is kept in memory only.
    pub persist: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            directory: None,
            persist: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: InsightConfig = toml::from_str("").unwrap();
        assert_eq!(config, InsightConfig::default());
        assert_eq!(config.chat.model, DEFAULT_MODEL);
        assert!(config.storage.persist);
    }

    #[test]
    fn test_partial_section() {
        let config: InsightConfig = toml::from_str(
            r#"
            [chat]
            model = "gemini-2.0-pro"

            [storage]
            persist = false
            "#,
        )
        .unwrap();
        assert_eq!(config.chat.model, "gemini-2.0-pro");
        assert_eq!(config.chat.error_message, DEFAULT_ERROR_MESSAGE);
        assert!(!config.storage.persist);
        assert_eq!(config.storage.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_blank_api_key_is_unconfigured() {
        let mut service = ServiceConfig::default();
        assert!(!service.is_configured());
        service.api_key = Some("  ".to_string());
        assert!(!service.is_configured());
        service.api_key = Some("key".to_string());
        assert!(service.is_configured());
    }
}
