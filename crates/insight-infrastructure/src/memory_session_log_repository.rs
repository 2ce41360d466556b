//! In-memory SessionLogRepository, used when persistence is turned off.

use async_trait::async_trait;
use insight_core::error::Result;
use insight_core::session::{SessionLog, SessionLogRepository};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemorySessionLogRepository {
    log: RwLock<Option<SessionLog>>,
}

impl MemorySessionLogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionLogRepository for MemorySessionLogRepository {
    async fn load(&self) -> Result<Option<SessionLog>> {
        Ok(self.log.read().await.clone())
    }

    async fn save(&self, log: &SessionLog) -> Result<()> {
        *self.log.write().await = Some(log.clone());
        Ok(())
    }
}
