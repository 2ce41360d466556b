mod context;
mod helper;
mod render;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Editor};
use tracing_subscriber::EnvFilter;

use insight_core::session::{
    ChatController, IgnoreReason, SessionLogRepository, SubmitOutcome,
};
use insight_infrastructure::{
    ConfigService, InsightPaths, MemorySessionLogRepository, TomlSessionLogRepository,
};
use insight_interaction::build_generation_service;

use crate::helper::{COMMANDS, CliHelper};

/// Ask questions about employee performance data from the terminal.
#[derive(Parser, Debug)]
#[command(name = "insight-chat", version, about)]
struct Args {
    /// Data file included in every prompt (JSON or text). Repeatable.
    #[arg(short, long = "context", value_name = "FILE")]
    context: Vec<PathBuf>,

    /// Alternative config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Overrides the model from config.toml
    #[arg(long)]
    model: Option<String>,

    /// Keep the chat history in memory only
    #[arg(long)]
    no_persist: bool,
}

/// Tracks which log entries have been printed so far.
struct PanelView {
    shown: usize,
}

impl PanelView {
    fn new() -> Self {
        Self { shown: 0 }
    }

    /// Prints every message not yet shown, if the panel is open.
    async fn sync(&mut self, controller: &ChatController) {
        if !controller.is_open().await {
            return;
        }
        let messages = controller.messages().await;
        for message in messages.iter().skip(self.shown) {
            println!("{}", render::render_message(message));
        }
        self.shown = messages.len();
    }

    async fn reprint_all(&mut self, controller: &ChatController) {
        self.shown = 0;
        self.sync(controller).await;
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Asks a y/N question on its own line editor.
fn confirm_on_terminal(prompt: &str) -> bool {
    let Ok(mut editor) = DefaultEditor::new() else {
        return false;
    };
    match editor.readline(&format!("{} [y/N] ", prompt)) {
        Ok(answer) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}

fn repository_for(
    args: &Args,
    config: &insight_core::config::StorageConfig,
) -> Result<Arc<dyn SessionLogRepository>> {
    if args.no_persist || !config.persist {
        return Ok(Arc::new(MemorySessionLogRepository::new()));
    }
    let repository = match &config.directory {
        Some(dir) => TomlSessionLogRepository::new(dir, &config.storage_key),
        None => TomlSessionLogRepository::default_location(&config.storage_key)?,
    };
    tracing::debug!(path = %repository.path().display(), "Using session log file");
    Ok(Arc::new(repository))
}

fn prompt_for(is_open: bool, unread: usize) -> String {
    match (is_open, unread) {
        (true, _) => ">> ".to_string(),
        (false, 0) => "(closed) >> ".to_string(),
        (false, n) => format!("({} unread) >> ", n),
    }
}

/// Message shown instead of the history when the panel is closed.
fn history_notice(is_open: bool) -> Option<&'static str> {
    (!is_open).then_some("The panel is closed. Use /open to show the conversation.")
}

fn print_help() {
    println!("{}", "Ask a question about the loaded data, or use a command:".bright_black());
    for cmd in COMMANDS {
        println!("  {}", cmd.bright_cyan());
    }
    println!("{}", "End a line with '\\' to continue on the next line. Type 'quit' to exit.".bright_black());
}

/// The main entry point for the Insight Chat terminal panel.
///
/// 1. Loads configuration, the session log and the context files
/// 2. Builds the generation service (disabled when no API key is configured)
/// 3. Runs the REPL; each question is one round trip through the controller
#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    // ===== Backend Initialization =====
    let config_service = match &args.config {
        Some(path) => ConfigService::with_paths(path.clone(), InsightPaths::secret_file()?),
        None => ConfigService::new()?,
    };
    let mut config = config_service.load()?;
    if let Some(model) = &args.model {
        config.chat.model = model.clone();
    }

    let repository = repository_for(&args, &config.storage)?;
    let service = build_generation_service(&config.service)?;
    let prompt_context = context::load_context(&args.context)?;

    let controller =
        ChatController::restore(config.chat.clone(), repository, service, prompt_context).await;
    controller.open().await;

    // ===== REPL Setup =====
    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));
    let mut view = PanelView::new();

    println!("{}", "=== Insight Chat ===".bright_magenta().bold());
    if !controller.is_configured() {
        println!(
            "{}",
            "No Gemini API key found (secret.json or GEMINI_API_KEY); questions will be ignored."
                .yellow()
        );
    }
    print_help();
    println!();
    view.sync(&controller).await;

    let mut pending_lines: Vec<String> = Vec::new();

    // ===== Main REPL Loop =====
    loop {
        let prompt = if pending_lines.is_empty() {
            prompt_for(controller.is_open().await, controller.unread_count().await)
        } else {
            ".. ".to_string()
        };

        let line = match rl.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                pending_lines.clear();
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        };

        // Trailing backslash continues the question on the next line
        if let Some(stripped) = line.strip_suffix('\\') {
            pending_lines.push(stripped.to_string());
            continue;
        }
        pending_lines.push(line);
        let input = pending_lines.join("\n");
        pending_lines.clear();

        let trimmed = input.trim();
        if trimmed.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(trimmed);

        match trimmed {
            "quit" | "exit" => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            "/open" => {
                controller.open().await;
                view.sync(&controller).await;
            }
            "/close" => {
                controller.close().await;
                println!("{}", "Panel closed. Replies will be counted as unread.".bright_black());
            }
            "/toggle" => {
                controller.toggle().await;
                view.sync(&controller).await;
            }
            "/clear" => {
                if controller.clear(&confirm_on_terminal).await {
                    view = PanelView::new();
                    println!("{}", "Chat history cleared.".bright_black());
                }
            }
            "/history" => match history_notice(controller.is_open().await) {
                Some(notice) => println!("{}", notice.yellow()),
                None => view.reprint_all(&controller).await,
            },
            "/status" => {
                println!(
                    "{}",
                    format!(
                        "panel: {} | unread: {} | messages: {} | pending: {}",
                        if controller.is_open().await { "open" } else { "closed" },
                        controller.unread_count().await,
                        controller.messages().await.len(),
                        controller.is_pending().await,
                    )
                    .bright_black()
                );
            }
            "/help" => print_help(),
            _ => {
                controller.set_input(input.as_str()).await;
                if controller.is_open().await && controller.is_configured() {
                    println!("{}", "Analyzing...".bright_black());
                }
                match controller.submit_input().await {
                    SubmitOutcome::Ignored(IgnoreReason::RequestPending) => {
                        println!("{}", "Still working on the previous question.".yellow());
                    }
                    SubmitOutcome::Ignored(_) => {}
                    SubmitOutcome::Completed { .. } | SubmitOutcome::Failed { .. } => {
                        view.sync(&controller).await;
                    }
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_on_closed_panel_points_to_open() {
        let notice = history_notice(false).unwrap();
        assert!(notice.contains("/open"));
        assert_eq!(history_notice(true), None);
    }

    #[test]
    fn test_prompt_shows_unread_while_closed() {
        assert_eq!(prompt_for(true, 3), ">> ");
        assert_eq!(prompt_for(false, 0), "(closed) >> ");
        assert_eq!(prompt_for(false, 2), "(2 unread) >> ");
    }
}
