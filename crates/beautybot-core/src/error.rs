use beautybot_types::WireError;
use thiserror::Error;

/// Ways a single completion round trip can fail.
///
/// The session collapses all of them into the same user-visible message; the
/// variants only matter for logs and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    /// The request never produced a response (DNS, refused connection, CORS,
    /// timeout, unreadable body)
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16 },

    /// The body did not carry `choices[0].message.content`
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl From<WireError> for ChatError {
    fn from(err: WireError) -> Self {
        ChatError::MalformedResponse(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("endpoint URL is empty")]
    EmptyEndpoint,

    #[error("endpoint URL must start with http:// or https://, got '{0}'")]
    InvalidEndpoint(String),

    #[error("failed to parse configuration: {0}")]
    Parse(String),
}
