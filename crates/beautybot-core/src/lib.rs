//! Chat session logic for beautybot
//!
//! Front ends (the browser widget and the terminal app) own a [`ChatSession`],
//! give it a [`ChatSurface`] to draw on and a [`CompletionClient`] to reach the
//! completion endpoint. Everything between the user pressing enter and the
//! reply showing up lives here.

pub mod client;
pub mod config;
pub mod error;
pub mod markdown;
pub mod session;
pub mod surface;
pub mod view;

#[cfg(test)]
mod tests;

// Re-export main types for convenience
pub use beautybot_types::{ConversationHistory, CompletionRequest, Message, Role};
pub use client::{completion_from_response, CompletionClient};
pub use config::{ChatConfig, FailedTurnPolicy};
pub use error::{ChatError, ConfigError};
pub use session::{ChatSession, PendingTurn, SubmitOutcome, TurnState};
pub use surface::ChatSurface;
pub use view::{ChatView, ViewBlock};
