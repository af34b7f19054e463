use beautybot_core::{ChatSurface, ChatView, ViewBlock};
use colored::Colorize;
use std::fmt::Display;
use std::io::{self, Stdout, Write};

const BOT_LABEL: &str = "bot ›";

/// Prints the conversation to a terminal
pub struct TerminalSurface<W: Write = Stdout> {
    out: W,
    thinking_width: usize,
}

impl TerminalSurface<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            thinking_width: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: impl Display) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            log::warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write> ChatSurface for TerminalSurface<W> {
    fn show_greeting(&mut self, text: &str) {
        self.emit(format!("{} {}\n", BOT_LABEL.bright_magenta().bold(), text));
    }

    // The greeting has already scrolled by; nothing to take back.
    fn remove_greeting(&mut self) {}

    // The line editor already echoed what was typed.
    fn show_prompt(&mut self, _text: &str) {}

    fn show_thinking(&mut self, text: &str) {
        self.thinking_width = text.chars().count();
        let written = write!(self.out, "{}", text.bright_black()).and_then(|_| self.out.flush());
        if let Err(e) = written {
            log::warn!("Failed to write to terminal: {}", e);
        }
    }

    fn hide_thinking(&mut self) {
        let blank = " ".repeat(self.thinking_width);
        self.thinking_width = 0;
        if let Err(e) = write!(self.out, "\r{}\r", blank) {
            log::warn!("Failed to write to terminal: {}", e);
        }
    }

    fn show_reply(&mut self, markdown: &str, _html: &str) {
        self.emit(format!("{} {}\n", BOT_LABEL.bright_magenta().bold(), markdown));
    }

    fn show_error(&mut self, message: &str) {
        self.emit(format!("{} {}\n", BOT_LABEL.bright_magenta().bold(), message.red()));
    }
}

/// Plain-text rendering of a conversation snapshot for `/history`
pub fn format_view(view: &ChatView) -> String {
    let mut out = String::new();
    for block in &view.blocks {
        let line = match block {
            ViewBlock::Greeting(text) => format!("{} {}", BOT_LABEL, text),
            ViewBlock::Prompt(text) => format!("you › {}", text),
            ViewBlock::Reply { markdown, .. } => format!("{} {}", BOT_LABEL, markdown),
            ViewBlock::Error(message) => format!("{} {}", BOT_LABEL, message.red()),
            ViewBlock::Thinking(text) => text.bright_black().to_string(),
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use beautybot_core::{ChatConfig, ChatError, ChatSession};
    use pretty_assertions::assert_eq;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_reply_is_printed_as_markdown() {
        plain();
        let mut surface = TerminalSurface::new(Vec::new());
        surface.show_reply("Try **Elvive**", "<p>Try <strong>Elvive</strong></p>\n");

        let printed = String::from_utf8(surface.into_inner()).unwrap();
        assert_eq!(printed, "bot › Try **Elvive**\n\n");
    }

    #[test]
    fn test_thinking_is_erased() {
        plain();
        let mut surface = TerminalSurface::new(Vec::new());
        surface.show_thinking("Thinking...");
        surface.hide_thinking();

        let printed = String::from_utf8(surface.into_inner()).unwrap();
        assert_eq!(printed, "Thinking...\r           \r");
    }

    #[test]
    fn test_format_view() {
        plain();
        let config = ChatConfig {
            greeting: "Hello!".to_string(),
            ..ChatConfig::default()
        };
        let mut session = ChatSession::open(config, TerminalSurface::new(Vec::new()));
        assert_eq!(format_view(&session.view()), "bot › Hello!\n");

        let turn = session.begin_turn("hi").unwrap();
        session.complete_turn(turn, Ok("Hey *there*".to_string()));
        let turn = session.begin_turn("again").unwrap();
        session.complete_turn(turn, Err(ChatError::HttpStatus { status: 500 }));

        assert_eq!(
            format_view(&session.view()),
            "you › hi\n\
             bot › Hey *there*\n\
             you › again\n\
             bot › Error occurred! Please try again later\n"
        );
    }
}
