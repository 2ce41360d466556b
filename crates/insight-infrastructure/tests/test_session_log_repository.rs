use insight_core::config::ChatConfig;
use insight_core::generation::GenerationService;
use insight_core::error::Result;
use insight_core::prompt::PromptContext;
use insight_core::session::{
    ChatController, ChatMessage, MessageRole, SessionLog, SessionLogRepository,
};
use insight_infrastructure::TomlSessionLogRepository;
use std::sync::Arc;
use tempfile::TempDir;

struct EchoService;

#[async_trait::async_trait]
impl GenerationService for EchoService {
    async fn generate(&self, _model: &str, _prompt: &str) -> Result<Option<String>> {
        Ok(Some("**Alice** leads the team".to_string()))
    }
}

#[tokio::test]
async fn test_load_before_first_save_is_none() {
    let temp_dir = TempDir::new().unwrap();
    let repo = TomlSessionLogRepository::new(temp_dir.path(), "history");

    assert!(repo.load().await.expect("Should load").is_none());
}

#[tokio::test]
async fn test_save_and_load_log() {
    let temp_dir = TempDir::new().unwrap();
    let repo = TomlSessionLogRepository::new(temp_dir.path(), "history");
    assert_eq!(repo.path(), temp_dir.path().join("history.toml"));

    let mut log = SessionLog::new();
    log.push(ChatMessage::user("Who needs coaching?"));
    log.push(ChatMessage::assistant("## Coaching\n- **Bob**: missed 3 deadlines"));
    repo.save(&log).await.expect("Should save log");

    let loaded = repo.load().await.expect("Should load").expect("Log stored");
    assert_eq!(loaded, log);
}

#[tokio::test]
async fn test_cleared_log_is_stored_empty() {
    let temp_dir = TempDir::new().unwrap();
    let repo = TomlSessionLogRepository::new(temp_dir.path(), "history");

    let mut log = SessionLog::new();
    log.push(ChatMessage::user("q"));
    repo.save(&log).await.unwrap();
    repo.save(&SessionLog::new()).await.unwrap();

    let loaded = repo.load().await.unwrap().unwrap();
    assert!(loaded.is_empty());
}

#[tokio::test]
async fn test_controller_restores_persisted_history() {
    let temp_dir = TempDir::new().unwrap();
    let service: Arc<dyn GenerationService> = Arc::new(EchoService);

    {
        let repo = Arc::new(TomlSessionLogRepository::new(temp_dir.path(), "history"));
        let controller = ChatController::restore(
            ChatConfig::default(),
            repo,
            Some(service.clone()),
            PromptContext::new(),
        )
        .await;
        controller.submit("top performers").await;
    }

    // simulated reload
    let repo = Arc::new(TomlSessionLogRepository::new(temp_dir.path(), "history"));
    let controller =
        ChatController::restore(ChatConfig::default(), repo, Some(service), PromptContext::new())
            .await;

    let messages = controller.messages().await;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, MessageRole::User);
    assert_eq!(messages[0].content, "top performers");
    assert_eq!(messages[1].content, "**Alice** leads the team");
}
