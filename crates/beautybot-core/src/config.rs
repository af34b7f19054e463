use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Proxy worker that forwards the message list to the model provider
pub const DEFAULT_ENDPOINT: &str = "https://loreal-chatbot-worker.theodore-anthony-reyes.workers.dev/";

pub const DEFAULT_GREETING: &str = "👋 Hello! How can I help you today?";

pub const DEFAULT_ERROR_MESSAGE: &str = "Error occurred! Please try again later";

pub const DEFAULT_THINKING_TEXT: &str = "Thinking...";

/// Generate the default system prompt for the beauty advisor
pub fn default_system_prompt() -> String {
    "You are a L'Oreal branded chatbot designed to help customers navigate L'Oreal's extensive \
    product catalog and provide tailored recommendations based on client input. Provide responses in a \
    fun, professional manner, using emojis when it enhances the response. Make responses easy to understand \
    and do not go into excessive detail unless specifically asked to.\n\n\
    Try to break apart long paragraphs into bullet points when necessary.\n\n\
    Importantly, if user input is not related to beauty products, skincare, routines, recommendations, or beauty-related topics, \
    then politely tell the user that you can not help them with that, but that you are ready to answer beauty-product-related \
    questions or other questions regarding L'Oreal products. If user input not related to beauty products, then do not directly \
    acknowledge whatever subject matter or content was entered in the user input.".to_string()
}

/// What happens to a user message whose request failed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailedTurnPolicy {
    /// Leave it in the history; it is resent with the next request
    #[default]
    Keep,
    /// Remove it so the next request only carries successful turns
    Discard,
}

/// Configuration for a chat session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub endpoint: String,
    pub system_prompt: String,
    pub greeting: String,
    pub error_message: String,
    pub thinking_text: String,
    pub failed_turns: FailedTurnPolicy,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            system_prompt: default_system_prompt(),
            greeting: DEFAULT_GREETING.to_string(),
            error_message: DEFAULT_ERROR_MESSAGE.to_string(),
            thinking_text: DEFAULT_THINKING_TEXT.to_string(),
            failed_turns: FailedTurnPolicy::default(),
        }
    }
}

impl ChatConfig {
    /// Parse a JSON document; missing fields fall back to their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ChatConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(ConfigError::InvalidEndpoint(endpoint.to_string()));
        }
        Ok(())
    }
}
