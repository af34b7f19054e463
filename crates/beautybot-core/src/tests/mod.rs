//! Test doubles shared by the session tests


use async_trait::async_trait;
use beautybot_types::CompletionRequest;
use std::cell::RefCell;
use std::collections::VecDeque;

use crate::client::CompletionClient;
use crate::error::ChatError;
use crate::surface::ChatSurface;

/// Every call a session made on its surface, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    Greeting(String),
    RemoveGreeting,
    Prompt(String),
    Thinking(String),
    HideThinking,
    Reply { markdown: String, html: String },
    Error(String),
    Scroll,
    ClearInput,
    InputEnabled(bool),
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn count(&self, wanted: &SurfaceCall) -> usize {
        self.calls.iter().filter(|c| *c == wanted).count()
    }

    pub fn replies(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::Reply { html, .. } => Some(html.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::Error(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl ChatSurface for RecordingSurface {
    fn show_greeting(&mut self, text: &str) {
        self.calls.push(SurfaceCall::Greeting(text.to_string()));
    }

    fn remove_greeting(&mut self) {
        self.calls.push(SurfaceCall::RemoveGreeting);
    }

    fn show_prompt(&mut self, text: &str) {
        self.calls.push(SurfaceCall::Prompt(text.to_string()));
    }

    fn show_thinking(&mut self, text: &str) {
        self.calls.push(SurfaceCall::Thinking(text.to_string()));
    }

    fn hide_thinking(&mut self) {
        self.calls.push(SurfaceCall::HideThinking);
    }

    fn show_reply(&mut self, markdown: &str, html: &str) {
        self.calls.push(SurfaceCall::Reply {
            markdown: markdown.to_string(),
            html: html.to_string(),
        });
    }

    fn show_error(&mut self, message: &str) {
        self.calls.push(SurfaceCall::Error(message.to_string()));
    }

    fn scroll_to_latest_prompt(&mut self) {
        self.calls.push(SurfaceCall::Scroll);
    }

    fn clear_input(&mut self) {
        self.calls.push(SurfaceCall::ClearInput);
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.calls.push(SurfaceCall::InputEnabled(enabled));
    }
}

/// Client that answers from a queue and remembers every request it saw
#[derive(Default)]
pub struct ScriptedClient {
    responses: RefCell<VecDeque<Result<String, ChatError>>>,
    pub requests: RefCell<Vec<CompletionRequest>>,
}

impl ScriptedClient {
    pub fn new(responses: Vec<Result<String, ChatError>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            requests: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl CompletionClient for ScriptedClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ChatError> {
        self.requests.borrow_mut().push(request.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ChatError::Network("no scripted response".to_string())))
    }
}
