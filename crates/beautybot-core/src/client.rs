use async_trait::async_trait;
use beautybot_types::{parse_completion, CompletionRequest};

use crate::error::ChatError;

/// Transport to the completion endpoint.
///
/// One call is one `POST` with a JSON body and no authentication headers.
/// Implementations never retry. Futures are not `Send` because the browser
/// runtime is single threaded.
#[async_trait(?Send)]
pub trait CompletionClient {
    /// Send the full history and return the first completion's content
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ChatError>;
}

/// Turn a received status and body into the completion text.
///
/// Shared by every transport so they classify failures the same way.
pub fn completion_from_response(status: u16, body: &str) -> Result<String, ChatError> {
    if !(200..300).contains(&status) {
        return Err(ChatError::HttpStatus { status });
    }
    Ok(parse_completion(body)?)
}
