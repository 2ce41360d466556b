//! Error types for Insight Chat.

use thiserror::Error;

/// A shared error type for the Insight Chat crates.
///
/// Variants are structured so callers can tell configuration problems apart
/// from storage and generation failures. Conversions from the common error
/// types are provided via `From`.
#[derive(Error, Debug, Clone)]
pub enum InsightError {
    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Session log storage error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Generation service error
    #[error("Generation error: {message}")]
    Generation {
        status_code: Option<u16>,
        message: String,
    },

    /// Prompt template error
    #[error("Template error: {0}")]
    Template(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl InsightError {
    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a Generation error without an HTTP status
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            status_code: None,
            message: message.into(),
        }
    }

    /// Creates a Generation error carrying the HTTP status of the failed call
    pub fn generation_with_status(status_code: u16, message: impl Into<String>) -> Self {
        Self::Generation {
            status_code: Some(status_code),
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this is a generation error
    pub fn is_generation(&self) -> bool {
        matches!(self, Self::Generation { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for InsightError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for InsightError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for InsightError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for InsightError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<minijinja::Error> for InsightError {
    fn from(err: minijinja::Error) -> Self {
        Self::Template(err.to_string())
    }
}

/// A type alias for `Result<T, InsightError>`.
pub type Result<T> = std::result::Result<T, InsightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_conversion_keeps_kind() {
        let err: InsightError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, InsightError::Io { .. }));
        assert!(err.to_string().contains("NotFound"));
    }

    #[test]
    fn test_generation_status() {
        let err = InsightError::generation_with_status(503, "unavailable");
        assert!(err.is_generation());
        match err {
            InsightError::Generation { status_code, .. } => assert_eq!(status_code, Some(503)),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_toml_conversion() {
        let err: InsightError = toml::from_str::<toml::Value>("= broken")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("Serialization error: TOML"));
    }
}
