//! Native HTTP transport for beautybot
//!
//! Sends the conversation to the completion endpoint with `reqwest`. Used by
//! the terminal front end; the browser widget has its own fetch-based client.

use async_trait::async_trait;
use beautybot_core::{completion_from_response, ChatError, CompletionClient};
use beautybot_types::CompletionRequest;
use std::time::Duration;

/// `CompletionClient` that POSTs JSON to a fixed endpoint
#[derive(Clone)]
pub struct HttpCompletionClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCompletionClient {
    /// Client without a request timeout
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Client whose requests fail with [`ChatError::Network`] after `timeout`
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ChatError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ChatError::Network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ChatError> {
        log::debug!(
            "POST {} with {} messages",
            self.endpoint,
            request.messages.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::debug!("Completion endpoint returned {}: {}", status, error_text);
            return Err(ChatError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        completion_from_response(status.as_u16(), &body)
    }
}
