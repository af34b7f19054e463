#![allow(dead_code)]

use serde_json::json;
use wiremock::matchers::*;
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CHAT_PATH: &str = "/chat";

/// Mock completion proxy for testing the HTTP client
pub struct CompletionMockServer {
    server: MockServer,
}

impl CompletionMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.server.uri(), CHAT_PATH)
    }

    pub fn server(&self) -> &MockServer {
        &self.server
    }

    /// Reply once with an OpenAI-style completion
    pub async fn mock_reply(&self, content: &str) {
        Mock::given(method("POST"))
            .and(path(CHAT_PATH))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "chatcmpl_test123",
                "object": "chat.completion",
                "created": 1700000000,
                "model": "gpt-4o",
                "choices": [{
                    "index": 0,
                    "message": {
                        "role": "assistant",
                        "content": content
                    },
                    "finish_reason": "stop"
                }],
                "usage": {
                    "prompt_tokens": 10,
                    "completion_tokens": 20,
                    "total_tokens": 30
                }
            })))
            .up_to_n_times(1)
            .mount(&self.server)
            .await;
    }

    /// Reply once with a bare status and an error body
    pub async fn mock_status(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path(CHAT_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error": {"message": "upstream failure"}
            })))
            .up_to_n_times(1)
            .mount(&self.server)
            .await;
    }

    /// Reply once with a 200 and an arbitrary body
    pub async fn mock_raw_body(&self, body: &str) {
        Mock::given(method("POST"))
            .and(path(CHAT_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .up_to_n_times(1)
            .mount(&self.server)
            .await;
    }

    /// Reply once, after `delay`
    pub async fn mock_slow_reply(&self, delay: std::time::Duration) {
        Mock::given(method("POST"))
            .and(path(CHAT_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"choices": [{"message": {"content": "late"}}]}))
                    .set_delay(delay),
            )
            .up_to_n_times(1)
            .mount(&self.server)
            .await;
    }

    /// Bodies of every request received so far, parsed as JSON
    pub async fn received_bodies(&self) -> Vec<serde_json::Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|req| serde_json::from_slice(&req.body).expect("request body is JSON"))
            .collect()
    }
}

/// An address nothing listens on
pub fn unreachable_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}{}", port, CHAT_PATH)
}
