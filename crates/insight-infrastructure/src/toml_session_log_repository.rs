//! TOML-based SessionLogRepository implementation

use crate::paths::InsightPaths;
use crate::storage::AtomicTomlFile;
use async_trait::async_trait;
use insight_core::error::{InsightError, Result};
use insight_core::session::{SessionLog, SessionLogRepository};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Stores the session log as a single TOML file named after a fixed key.
///
/// ```text
/// base_dir/
/// └── <storage_key>.toml
/// ```
///
/// File I/O runs on the blocking thread pool so the event loop is never
/// stalled by a slow disk.
pub struct TomlSessionLogRepository {
    file: Arc<AtomicTomlFile<SessionLog>>,
}

impl TomlSessionLogRepository {
    /// Creates a repository storing `<base_dir>/<storage_key>.toml`.
    pub fn new(base_dir: impl AsRef<Path>, storage_key: &str) -> Self {
        let path = base_dir.as_ref().join(format!("{}.toml", storage_key));
        Self {
            file: Arc::new(AtomicTomlFile::new(path)),
        }
    }

    /// Creates a repository in the platform data directory.
    pub fn default_location(storage_key: &str) -> Result<Self> {
        Ok(Self::new(InsightPaths::data_dir()?, storage_key))
    }

    pub fn path(&self) -> PathBuf {
        self.file.path().to_path_buf()
    }
}

#[async_trait]
impl SessionLogRepository for TomlSessionLogRepository {
    async fn load(&self) -> Result<Option<SessionLog>> {
        let file = self.file.clone();
        let log = tokio::task::spawn_blocking(move || file.load())
            .await
            .map_err(|e| InsightError::internal(format!("Session log load task failed: {}", e)))??;
        debug!(path = %self.file.path().display(), found = log.is_some(), "Loaded session log");
        Ok(log)
    }

    async fn save(&self, log: &SessionLog) -> Result<()> {
        let file = self.file.clone();
        let log = log.clone();
        tokio::task::spawn_blocking(move || file.save(&log))
            .await
            .map_err(|e| InsightError::internal(format!("Session log save task failed: {}", e)))?
    }
}
