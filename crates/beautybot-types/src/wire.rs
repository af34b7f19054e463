//! JSON bodies exchanged with the completion endpoint.
//!
//! Request: `{"messages": [{"role": .., "content": ..}, ..]}`.
//! Response: any JSON object carrying `choices[0].message.content`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Message;

/// Body of the POST sent to the completion endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub messages: Vec<Message>,
}

/// The subset of an OpenAI-style chat completion this client reads
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    pub content: String,
}

#[derive(Debug, Error)]
pub enum WireError {
    #[error("invalid completion body: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("completion body has no choices")]
    NoChoices,
}

impl CompletionResponse {
    /// Content of the first choice
    pub fn into_content(self) -> Result<String, WireError> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(WireError::NoChoices)
    }
}

/// Extract `choices[0].message.content` from a raw response body.
pub fn parse_completion(body: &str) -> Result<String, WireError> {
    let response: CompletionResponse = serde_json::from_str(body)?;
    response.into_content()
}
