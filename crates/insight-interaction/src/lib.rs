//! Generation service implementations.

pub mod gemini_generation_service;

pub use gemini_generation_service::GeminiGenerationService;

use insight_core::config::ServiceConfig;
use insight_core::error::Result;
use insight_core::generation::GenerationService;
use std::sync::Arc;
use tracing::info;

/// Builds the generation service described by `config`.
///
/// Returns `Ok(None)` when no API key is configured; the chat controller then
/// silently ignores submissions.
pub fn build_generation_service(
    config: &ServiceConfig,
) -> Result<Option<Arc<dyn GenerationService>>> {
    if !config.is_configured() {
        info!("No Gemini API key configured; chat submissions are disabled");
        return Ok(None);
    }

    let service = GeminiGenerationService::from_config(config)?;
    Ok(Some(Arc::new(service)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_service_is_none() {
        assert!(build_generation_service(&ServiceConfig::default())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_configured_service_is_some() {
        let config = ServiceConfig {
            api_key: Some("key".to_string()),
            ..ServiceConfig::default()
        };
        assert!(build_generation_service(&config).unwrap().is_some());
    }
}
