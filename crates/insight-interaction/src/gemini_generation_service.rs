//! GeminiGenerationService - Direct REST API implementation for Gemini.
//!
//! Calls `models/{model}:generateContent` once per request. No retries.
//! The API key travels in a header, never in the URL.

use async_trait::async_trait;
use insight_core::config::ServiceConfig;
use insight_core::error::{InsightError, Result};
use insight_core::generation::GenerationService;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Generation service that talks to the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiGenerationService {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiGenerationService {
    /// Creates a service with the default endpoint and no request timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Builds a service from configuration.
    ///
    /// Returns a config error when no API key is present.
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| InsightError::config("Gemini API key is not configured"))?;

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| InsightError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| BASE_URL.to_string()),
        })
    }

    /// Overrides the endpoint after construction.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn send_request(&self, model: &str, body: &GenerateContentRequest) -> Result<Option<String>> {
        let url = format!(
            "{}/{model}:generateContent",
            self.base_url.trim_end_matches('/'),
        );

        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|err| {
                InsightError::generation(format!("Gemini API request failed: {}", err.without_url()))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|err| {
            InsightError::generation(format!("Failed to parse Gemini response: {}", err.without_url()))
        })?;

        Ok(extract_text_response(parsed))
    }
}

#[async_trait]
impl GenerationService for GeminiGenerationService {
    async fn generate(&self, model: &str, prompt: &str) -> Result<Option<String>> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };
        debug!(model, "Sending Gemini generateContent request");
        self.send_request(model, &request).await
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

/// Concatenates the text parts of the first candidate.
fn extract_text_response(response: GenerateContentResponse) -> Option<String> {
    let parts = response
        .candidates?
        .into_iter()
        .next()?
        .content?
        .parts;

    let text: String = parts.into_iter().filter_map(|part| part.text).collect();
    if text.is_empty() { None } else { Some(text) }
}

fn map_http_error(status: StatusCode, body: String) -> InsightError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    InsightError::generation_with_status(status.as_u16(), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_request_body_shape() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: "hello".to_string(),
                }],
            }],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response = parse(
            r###"{"candidates":[{"content":{"parts":[{"text":"## Top\n"},{"text":"- Alice"}]}}]}"###,
        );
        assert_eq!(
            extract_text_response(response),
            Some("## Top\n- Alice".to_string())
        );
    }

    #[test]
    fn test_extract_text_without_candidates_is_none() {
        assert_eq!(extract_text_response(parse(r#"{}"#)), None);
        assert_eq!(extract_text_response(parse(r#"{"candidates":[]}"#)), None);
        assert_eq!(
            extract_text_response(parse(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#)),
            None
        );
    }

    #[test]
    fn test_map_http_error_uses_error_body() {
        let err = map_http_error(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"error":{"code":429,"message":"Quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#
                .to_string(),
        );
        match err {
            InsightError::Generation {
                status_code,
                message,
            } => {
                assert_eq!(status_code, Some(429));
                assert_eq!(message, "RESOURCE_EXHAUSTED: Quota exceeded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_map_http_error_falls_back_to_raw_body() {
        let err = map_http_error(StatusCode::BAD_GATEWAY, "upstream down".to_string());
        assert!(err.to_string().contains("upstream down"));
    }

    #[test]
    fn test_from_config_requires_api_key() {
        let err = GeminiGenerationService::from_config(&ServiceConfig::default()).err();
        assert!(err.is_some_and(|e| e.is_config()));
    }

    #[test]
    fn test_from_config_uses_base_url_override() {
        let config = ServiceConfig {
            api_key: Some("key".to_string()),
            base_url: Some("http://localhost:8080/models".to_string()),
            timeout_secs: Some(5),
        };
        let service = GeminiGenerationService::from_config(&config).unwrap();
        assert_eq!(service.base_url, "http://localhost:8080/models");
    }

    #[tokio::test]
    async fn test_transport_error_does_not_expose_api_key() {
        let service = GeminiGenerationService::new("SECRETKEY123")
            .with_base_url("http://127.0.0.1:1/models");
        let err = service
            .generate("gemini-2.5-flash", "hello")
            .await
            .expect_err("nothing listens on port 1");

        assert!(err.is_generation());
        assert!(!err.to_string().contains("SECRETKEY123"));
    }
}
