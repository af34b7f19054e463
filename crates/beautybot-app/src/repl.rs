use anyhow::Result;
use beautybot_core::{ChatConfig, ChatSession, CompletionClient, SubmitOutcome};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::terminal::{format_view, TerminalSurface};

const PROMPT: &str = "you › ";

/// What a line typed at the prompt asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Exit,
    History,
    Send(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "exit" | "quit" => ReplCommand::Exit,
            "/history" => ReplCommand::History,
            _ => ReplCommand::Send(line.to_string()),
        }
    }
}

/// Run interactive REPL mode
pub async fn run_repl_mode<C: CompletionClient>(config: ChatConfig, client: C) -> Result<()> {
    println!("{}", "💄 beautybot - your beauty advisor".bright_magenta().bold());
    println!("{}", format!("Endpoint: {}", config.endpoint).bright_black());
    println!(
        "{}",
        "Type 'exit' or 'quit' to exit, or '/history' to review the conversation\n".bright_black()
    );

    let mut session = ChatSession::open(config, TerminalSurface::stdout());
    let mut editor = DefaultEditor::new()?;

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        match ReplCommand::parse(&line) {
            ReplCommand::Exit => break,
            ReplCommand::History => print!("{}", format_view(&session.view())),
            ReplCommand::Send(text) => {
                if !text.trim().is_empty() {
                    let _ = editor.add_history_entry(text.as_str());
                }
                if let SubmitOutcome::Failed(e) = session.submit(&client, &text).await {
                    log::info!("Turn failed: {}", e);
                }
            }
        }
    }

    log::info!(
        "Session closed after {} messages",
        session.history().len()
    );
    Ok(())
}
