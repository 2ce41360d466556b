//! Generation service trait.

use crate::error::Result;
use async_trait::async_trait;

/// An external service that turns a prompt into natural-language text.
///
/// Implementations make a single attempt per call. Retries, backoff and
/// timeouts are the implementation's own business; the chat controller never
/// retries.
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Generates a response for `prompt` using `model`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(text))`: The service produced text
    /// - `Ok(None)`: The call succeeded but carried no text
    /// - `Err(_)`: The call failed
    async fn generate(&self, model: &str, prompt: &str) -> Result<Option<String>>;
}
