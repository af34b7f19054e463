use thiserror::Error;

use crate::wire::CompletionRequest;
use crate::{Message, Role};

/// Errors raised when a history would break the single-system-message rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("the system message is fixed at session start and cannot be appended")]
    SystemMessageFixed,
    #[error("history must start with a system message")]
    MissingSystemMessage,
    #[error("unexpected system message at position {0}")]
    MisplacedSystemMessage(usize),
}

/// Ordered conversation history.
///
/// The first entry is always the system prompt and is the only system entry.
/// Insertion order is the literal order of the request payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationHistory {
    messages: Vec<Message>,
}

impl ConversationHistory {
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(system_prompt)],
        }
    }

    /// Rebuild a history from a serialized message list.
    pub fn from_messages(messages: Vec<Message>) -> Result<Self, HistoryError> {
        match messages.first() {
            Some(first) if first.role == Role::System => {}
            _ => return Err(HistoryError::MissingSystemMessage),
        }

        if let Some(pos) = messages
            .iter()
            .skip(1)
            .position(|m| m.role == Role::System)
        {
            return Err(HistoryError::MisplacedSystemMessage(pos + 1));
        }

        Ok(Self { messages })
    }

    /// Append a message. Content is not validated; empty strings are kept as-is.
    pub fn append(&mut self, role: Role, content: impl Into<String>) -> Result<(), HistoryError> {
        if role == Role::System {
            return Err(HistoryError::SystemMessageFixed);
        }
        self.messages.push(Message::new(role, content));
        Ok(())
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(Message::assistant(content));
    }

    /// Roll back to an earlier length. The system message always survives.
    pub fn truncate_to(&mut self, len: usize) {
        self.messages.truncate(len.max(1));
    }

    pub fn system_prompt(&self) -> &str {
        &self.messages[0].content
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Messages after the system prompt, i.e. the visible conversation
    pub fn turns(&self) -> &[Message] {
        &self.messages[1..]
    }

    pub fn last(&self) -> &Message {
        // never empty: the system message is always present
        &self.messages[self.messages.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Never true, the system message is always present.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Serialize to the request body sent to the completion endpoint.
    pub fn to_request(&self) -> CompletionRequest {
        CompletionRequest {
            messages: self.messages.clone(),
        }
    }
}
