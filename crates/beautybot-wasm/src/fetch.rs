use async_trait::async_trait;
use beautybot_core::{completion_from_response, ChatError, CompletionClient};
use beautybot_types::CompletionRequest;
use gloo_net::http::Request;

/// Browser `fetch` transport. No timeout: a hung request stays pending.
pub struct FetchCompletionClient {
    endpoint: String,
}

impl FetchCompletionClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait(?Send)]
impl CompletionClient for FetchCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ChatError> {
        let response = Request::post(&self.endpoint)
            .json(request)
            .map_err(|e| ChatError::Network(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = response.status();
        if !response.ok() {
            return Err(ChatError::HttpStatus { status });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        completion_from_response(status, &body)
    }
}
