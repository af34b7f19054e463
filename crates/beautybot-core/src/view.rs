//! Immutable snapshot of what the chat window shows.

use beautybot_types::{ConversationHistory, Role};

use crate::markdown::render_markdown;

/// One block in the chat window, top to bottom
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewBlock {
    Greeting(String),
    Prompt(String),
    Reply { markdown: String, html: String },
    Error(String),
    Thinking(String),
}

/// An error notice, anchored after the first `anchor` history entries.
///
/// `prompt` carries the user text when the failed message was removed from
/// the history, so the snapshot still shows what was typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FailureNotice {
    pub anchor: usize,
    pub prompt: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatView {
    pub blocks: Vec<ViewBlock>,
}

impl ChatView {
    pub(crate) fn build(
        history: &ConversationHistory,
        notices: &[FailureNotice],
        greeting: Option<&str>,
        thinking: Option<&str>,
    ) -> Self {
        let mut blocks = Vec::with_capacity(history.len() + notices.len() + 2);

        if let Some(text) = greeting {
            blocks.push(ViewBlock::Greeting(text.to_string()));
        }

        for anchor in 1..=history.len() {
            if anchor > 1 {
                let msg = &history.messages()[anchor - 1];
                blocks.push(match msg.role {
                    Role::Assistant => ViewBlock::Reply {
                        markdown: msg.content.clone(),
                        html: render_markdown(&msg.content),
                    },
                    _ => ViewBlock::Prompt(msg.content.clone()),
                });
            }

            for notice in notices.iter().filter(|n| n.anchor == anchor) {
                if let Some(prompt) = &notice.prompt {
                    blocks.push(ViewBlock::Prompt(prompt.clone()));
                }
                blocks.push(ViewBlock::Error(notice.message.clone()));
            }
        }

        if let Some(text) = thinking {
            blocks.push(ViewBlock::Thinking(text.to_string()));
        }

        Self { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of prompt blocks, including prompts of discarded turns
    pub fn prompt_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, ViewBlock::Prompt(_)))
            .count()
    }
}
