//! Configuration service implementation.
//!
//! Loads `config.toml` and merges the Gemini API key from `secret.json`.
//! The `GEMINI_API_KEY` environment variable wins over both files.

use crate::paths::InsightPaths;
use insight_core::config::InsightConfig;
use insight_core::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Root structure of secret.json
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecretConfig {
    #[serde(default)]
    pub gemini: Option<GeminiSecret>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSecret {
    pub api_key: String,
}

/// Loads [`InsightConfig`] from disk.
#[derive(Debug, Clone)]
pub struct ConfigService {
    config_path: PathBuf,
    secret_path: PathBuf,
}

impl ConfigService {
    /// Uses `config.toml` and `secret.json` from the platform config directory.
    pub fn new() -> Result<Self> {
        Ok(Self::with_paths(
            InsightPaths::config_file()?,
            InsightPaths::secret_file()?,
        ))
    }

    pub fn with_paths(config_path: impl Into<PathBuf>, secret_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            secret_path: secret_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads the configuration, reading the API key override from the
    /// environment.
    pub fn load(&self) -> Result<InsightConfig> {
        self.load_with_env_key(std::env::var(API_KEY_ENV).ok())
    }

    /// Loads the configuration using `env_key` as the environment override.
    ///
    /// Missing files yield defaults; files that exist but do not parse are an
    /// error.
    pub fn load_with_env_key(&self, env_key: Option<String>) -> Result<InsightConfig> {
        let mut config = match read_non_empty(&self.config_path)? {
            Some(content) => toml::from_str::<InsightConfig>(&content)?,
            None => {
                debug!(path = %self.config_path.display(), "No config file, using defaults");
                InsightConfig::default()
            }
        };

        if let Some(content) = read_non_empty(&self.secret_path)? {
            let secrets: SecretConfig = serde_json::from_str(&content)?;
            if let Some(gemini) = secrets.gemini {
                config.service.api_key = Some(gemini.api_key);
            }
        }

        if let Some(key) = env_key.filter(|key| !key.trim().is_empty()) {
            config.service.api_key = Some(key);
        }

        Ok(config)
    }
}

fn read_non_empty(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(content))
    }
}
