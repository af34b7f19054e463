use beautybot_types::{CompletionRequest, ConversationHistory};

use crate::client::CompletionClient;
use crate::config::{ChatConfig, FailedTurnPolicy};
use crate::error::ChatError;
use crate::markdown::render_markdown;
use crate::surface::ChatSurface;
use crate::view::{ChatView, FailureNotice};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    Idle,
    AwaitingReply,
}

/// Result of one submit cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The assistant reply that was appended and rendered
    Replied(String),
    /// The request failed; the fixed error message was rendered
    Failed(ChatError),
    /// Another turn was still awaiting its reply; nothing happened
    Busy,
}

/// A user turn that has been sent and is waiting for its reply.
///
/// Obtained from [`ChatSession::begin_turn`] and handed back to
/// [`ChatSession::complete_turn`] together with the client's result.
#[derive(Debug)]
#[must_use = "a pending turn must be completed or the session stays busy"]
pub struct PendingTurn {
    request: CompletionRequest,
    prompt: String,
    prompt_index: usize,
}

impl PendingTurn {
    pub fn request(&self) -> &CompletionRequest {
        &self.request
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

/// One chat conversation and the surface it is drawn on.
///
/// Only one turn can be in flight: while a reply is pending the input is
/// disabled and further submissions return [`SubmitOutcome::Busy`].
pub struct ChatSession<S: ChatSurface> {
    config: ChatConfig,
    history: ConversationHistory,
    state: TurnState,
    greeting_visible: bool,
    notices: Vec<FailureNotice>,
    surface: S,
}

impl<S: ChatSurface> ChatSession<S> {
    /// Start a session: fresh history with the system prompt, greeting shown.
    pub fn open(config: ChatConfig, mut surface: S) -> Self {
        surface.show_greeting(&config.greeting);
        log::info!("Chat session opened against {}", config.endpoint);

        Self {
            history: ConversationHistory::new(config.system_prompt.clone()),
            config,
            state: TurnState::Idle,
            greeting_visible: true,
            notices: Vec::new(),
            surface,
        }
    }

    /// Run a full submit cycle against `client`.
    pub async fn submit<C>(&mut self, client: &C, raw_input: &str) -> SubmitOutcome
    where
        C: CompletionClient + ?Sized,
    {
        let Some(turn) = self.begin_turn(raw_input) else {
            return SubmitOutcome::Busy;
        };
        let result = client.complete(turn.request()).await;
        self.complete_turn(turn, result)
    }

    /// Record and display the user's message, then hand back the request to send.
    ///
    /// Input is trimmed but never rejected, so an empty prompt is still sent.
    /// Returns `None` while another turn is pending.
    pub fn begin_turn(&mut self, raw_input: &str) -> Option<PendingTurn> {
        if self.state == TurnState::AwaitingReply {
            log::warn!("Ignoring submission while a reply is pending");
            return None;
        }

        let prompt = raw_input.trim().to_string();
        let prompt_index = self.history.len();
        self.history.push_user(prompt.clone());

        if self.greeting_visible {
            self.surface.remove_greeting();
            self.greeting_visible = false;
        }

        self.surface.show_prompt(&prompt);
        self.surface.clear_input();
        self.surface.set_input_enabled(false);
        self.surface.show_thinking(&self.config.thinking_text);
        self.surface.scroll_to_latest_prompt();
        self.state = TurnState::AwaitingReply;

        log::debug!(
            "Sending {} messages to {}",
            self.history.len(),
            self.config.endpoint
        );

        Some(PendingTurn {
            request: self.history.to_request(),
            prompt,
            prompt_index,
        })
    }

    /// Apply the client's result to the history and the surface.
    pub fn complete_turn(
        &mut self,
        turn: PendingTurn,
        result: Result<String, ChatError>,
    ) -> SubmitOutcome {
        self.surface.hide_thinking();

        let outcome = match result {
            Ok(content) => {
                self.history.push_assistant(content.clone());
                let html = render_markdown(&content);
                self.surface.show_reply(&content, &html);
                SubmitOutcome::Replied(content)
            }
            Err(error) => {
                log::error!("ERROR: {}", error);

                let prompt = match self.config.failed_turns {
                    FailedTurnPolicy::Keep => None,
                    FailedTurnPolicy::Discard => {
                        self.history.truncate_to(turn.prompt_index);
                        Some(turn.prompt)
                    }
                };
                self.notices.push(FailureNotice {
                    anchor: self.history.len(),
                    prompt,
                    message: self.config.error_message.clone(),
                });

                self.surface.show_error(&self.config.error_message);
                SubmitOutcome::Failed(error)
            }
        };

        self.surface.scroll_to_latest_prompt();
        self.surface.set_input_enabled(true);
        self.state = TurnState::Idle;
        outcome
    }

    /// Snapshot of everything currently on screen
    pub fn view(&self) -> ChatView {
        let greeting = self.greeting_visible.then_some(self.config.greeting.as_str());
        let thinking = self
            .is_pending()
            .then_some(self.config.thinking_text.as_str());
        ChatView::build(&self.history, &self.notices, greeting, thinking)
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == TurnState::AwaitingReply
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
