pub mod config_service;
pub mod memory_session_log_repository;
pub mod paths;
pub mod storage;
pub mod toml_session_log_repository;

pub use crate::config_service::ConfigService;
pub use crate::memory_session_log_repository::MemorySessionLogRepository;
pub use crate::paths::InsightPaths;
pub use crate::toml_session_log_repository::TomlSessionLogRepository;
