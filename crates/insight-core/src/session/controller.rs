use super::confirm::Confirmation;
use super::log::SessionLog;
use super::message::ChatMessage;
use super::repository::SessionLogRepository;
use super::state::{PanelState, RequestState};
use crate::config::ChatConfig;
use crate::error::Result;
use crate::generation::GenerationService;
use crate::prompt::{PromptBuilder, PromptContext};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

/// Why a submission was dropped without doing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// No generation service is configured.
    NotConfigured,
    /// The query was empty or whitespace-only.
    EmptyQuery,
    /// Another request is still outstanding.
    RequestPending,
}

/// Result of [`ChatController::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Ignored(IgnoreReason),
    /// The service answered; `reply` holds its text or the fallback message.
    Completed { reply: ChatMessage },
    /// The service call failed; `reply` holds the fixed error message.
    Failed { reply: ChatMessage },
}

impl SubmitOutcome {
    pub fn reply(&self) -> Option<&ChatMessage> {
        match self {
            SubmitOutcome::Ignored(_) => None,
            SubmitOutcome::Completed { reply } | SubmitOutcome::Failed { reply } => Some(reply),
        }
    }
}

#[derive(Default)]
struct SessionState {
    log: SessionLog,
    request: RequestState,
    panel: PanelState,
    input: String,
}

/// Owns the chat session: the message log, the pending-request gate, the
/// panel state and the input buffer.
///
/// `ChatController` is meant to be shared behind an `Arc`. State lives behind
/// a `tokio::sync::Mutex` that is released while the generation call is in
/// flight, so readers (and rejected duplicate submissions) never wait on the
/// network.
pub struct ChatController {
    state: Mutex<SessionState>,
    config: ChatConfig,
    service: Option<Arc<dyn GenerationService>>,
    repository: Arc<dyn SessionLogRepository>,
    prompt_builder: PromptBuilder,
    context: PromptContext,
}

impl ChatController {
    /// Creates a controller and restores the session log from `repository`.
    ///
    /// A failing load is logged and treated as an empty log.
    ///
    /// # Arguments
    ///
    /// * `config` - Chat behaviour (model, fixed messages, prompt template)
    /// * `repository` - Persistent store for the session log
    /// * `service` - The generation service, or `None` when unconfigured
    /// * `context` - Data blocks included in every prompt
    pub async fn restore(
        config: ChatConfig,
        repository: Arc<dyn SessionLogRepository>,
        service: Option<Arc<dyn GenerationService>>,
        context: PromptContext,
    ) -> Self {
        let log = match repository.load().await {
            Ok(Some(log)) => {
                debug!(messages = log.len(), "Restored session log");
                log
            }
            Ok(None) => SessionLog::new(),
            Err(e) => {
                warn!(error = %e, "Failed to load session log, starting empty");
                SessionLog::new()
            }
        };

        let prompt_builder = match &config.prompt_template {
            Some(template) => PromptBuilder::with_template(template.clone()),
            None => PromptBuilder::new(),
        };

        Self {
            state: Mutex::new(SessionState {
                log,
                ..SessionState::default()
            }),
            config,
            service,
            repository,
            prompt_builder,
            context,
        }
    }

    /// Sends `query` to the generation service and records both sides of the
    /// exchange.
    ///
    /// The user message is appended before the call is dispatched. Exactly one
    /// assistant message follows: the service text, the fallback message when
    /// the service returns nothing or only whitespace, or the error message
    /// when the call fails.
    pub async fn submit(&self, query: &str) -> SubmitOutcome {
        let Some(service) = self.service.clone() else {
            debug!("Submission ignored: generation service is not configured");
            return SubmitOutcome::Ignored(IgnoreReason::NotConfigured);
        };

        if query.trim().is_empty() {
            return SubmitOutcome::Ignored(IgnoreReason::EmptyQuery);
        }

        {
            let mut state = self.state.lock().await;
            if !state.request.try_begin() {
                debug!("Submission ignored: a request is already pending");
                return SubmitOutcome::Ignored(IgnoreReason::RequestPending);
            }
            state.log.push(ChatMessage::user(query));
            state.input.clear();
            self.persist(&state.log).await;
        }

        let (reply, succeeded) = match self.generate(service.as_ref(), query).await {
            Ok(Some(text)) if !text.trim().is_empty() => (ChatMessage::assistant(text), true),
            Ok(_) => {
                warn!("Generation service returned no text");
                (ChatMessage::assistant(self.config.fallback_message.clone()), true)
            }
            Err(e) => {
                error!(error = %e, "Generation request failed");
                (ChatMessage::assistant(self.config.error_message.clone()), false)
            }
        };

        let mut state = self.state.lock().await;
        state.log.push(reply.clone());
        state.request.finish();
        state.panel.note_incoming();
        self.persist(&state.log).await;

        if succeeded {
            SubmitOutcome::Completed { reply }
        } else {
            SubmitOutcome::Failed { reply }
        }
    }

    /// Submits the current contents of the input buffer.
    pub async fn submit_input(&self) -> SubmitOutcome {
        let input = self.state.lock().await.input.clone();
        self.submit(&input).await
    }

    /// Clears the whole log once `confirmation` agrees.
    ///
    /// Refused without asking while a request is pending, so a late reply
    /// never lands in a log that lost its question. Returns `true` when the
    /// log was cleared.
    pub async fn clear(&self, confirmation: &dyn Confirmation) -> bool {
        if self.is_pending().await {
            debug!("Clear refused: a request is pending");
            return false;
        }
        if !confirmation.confirm(&self.config.clear_confirmation) {
            return false;
        }

        let mut state = self.state.lock().await;
        if state.request.is_pending() {
            return false;
        }
        state.log = SessionLog::new();
        self.persist(&state.log).await;
        info!("Chat history cleared");
        true
    }

    pub async fn open(&self) {
        self.state.lock().await.panel.open();
    }

    pub async fn close(&self) {
        self.state.lock().await.panel.close();
    }

    pub async fn toggle(&self) {
        self.state.lock().await.panel.toggle();
    }

    pub async fn is_open(&self) -> bool {
        self.state.lock().await.panel.is_open()
    }

    pub async fn unread_count(&self) -> usize {
        self.state.lock().await.panel.unread()
    }

    /// Snapshot of the session log.
    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.state.lock().await.log.messages().to_vec()
    }

    pub async fn is_pending(&self) -> bool {
        self.state.lock().await.request.is_pending()
    }

    pub async fn input(&self) -> String {
        self.state.lock().await.input.clone()
    }

    pub async fn set_input(&self, input: impl Into<String>) {
        self.state.lock().await.input = input.into();
    }

    pub fn is_configured(&self) -> bool {
        self.service.is_some()
    }

    async fn generate(&self, service: &dyn GenerationService, query: &str) -> Result<Option<String>> {
        let prompt = self.prompt_builder.compose(&self.context, query)?;
        debug!(model = %self.config.model, prompt_len = prompt.len(), "Dispatching generation request");
        service.generate(&self.config.model, &prompt).await
    }

    async fn persist(&self, log: &SessionLog) {
        if let Err(e) = self.repository.save(log).await {
            warn!(error = %e, "Failed to persist session log");
        }
    }
}
