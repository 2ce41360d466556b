//! Session log repository trait.
//!
//! Defines the interface for persisting the session log.

use super::log::SessionLog;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for the session log.
///
/// There is exactly one log per user, stored under a fixed key chosen by the
/// implementation. The controller reads it once on start-up and writes the
/// whole log after every mutation.
#[async_trait]
pub trait SessionLogRepository: Send + Sync {
    /// Loads the stored log.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(SessionLog))`: A log was stored
    /// - `Ok(None)`: Nothing stored yet
    /// - `Err(_)`: Error occurred during retrieval
    async fn load(&self) -> Result<Option<SessionLog>>;

    /// Replaces the stored log with `log`.
    async fn save(&self, log: &SessionLog) -> Result<()>;
}
