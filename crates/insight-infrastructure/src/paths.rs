//! Path management for Insight Chat files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/insight-chat/            # Config directory
//! ├── config.toml                    # Application configuration
//! └── secret.json                    # API keys
//!
//! ~/.local/share/insight-chat/       # Data directory
//! └── performance-chat-history.toml  # Session log (named after the storage key)
//! ```

use insight_core::error::{InsightError, Result};
use std::path::PathBuf;

const APP_DIR: &str = "insight-chat";

pub struct InsightPaths;

impl InsightPaths {
    /// Returns the platform configuration directory for Insight Chat.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| InsightError::config("Cannot find config directory"))
    }

    /// Returns the platform data directory for Insight Chat.
    pub fn data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| InsightError::config("Cannot find data directory"))
    }

    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the secrets file.
    ///
    /// # Security Note
    ///
    /// Ensure this file has appropriate permissions (e.g., 600) to prevent
    /// unauthorized access.
    pub fn secret_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("secret.json"))
    }
}
