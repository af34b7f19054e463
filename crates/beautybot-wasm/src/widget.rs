use beautybot_core::{ChatConfig, ChatSession, CompletionClient, SubmitOutcome};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement};

use crate::fetch::FetchCompletionClient;
use crate::surface::DomSurface;

type SharedSession = Rc<RefCell<ChatSession<DomSurface>>>;

/// The chat widget mounted on the page's form and chat window
pub struct ChatWidget {
    session: SharedSession,
    client: Rc<FetchCompletionClient>,
    form: Element,
    input: HtmlInputElement,
}

impl ChatWidget {
    pub fn mount(document: &Document, config: ChatConfig) -> Result<Self, JsValue> {
        let surface = DomSurface::attach(document)?;
        let form = surface.form().clone();
        let input = surface.input().clone();
        let client = Rc::new(FetchCompletionClient::new(config.endpoint.clone()));

        Ok(Self {
            session: Rc::new(RefCell::new(ChatSession::open(config, surface))),
            client,
            form,
            input,
        })
    }

    /// Attach the submit handler. The widget lives as long as the page.
    pub fn start(self) -> Result<(), JsValue> {
        let Self {
            session,
            client,
            form,
            input,
        } = self;

        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            event.prevent_default();
            submit(session.clone(), client.clone(), &input.value());
        }) as Box<dyn FnMut(_)>);

        form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
        closure.forget(); // Keep the closure alive

        Ok(())
    }
}

/// Run one turn. The session is never borrowed across the network await.
fn submit(session: SharedSession, client: Rc<FetchCompletionClient>, raw_input: &str) {
    let turn = session.borrow_mut().begin_turn(raw_input);
    let Some(turn) = turn else {
        return;
    };

    wasm_bindgen_futures::spawn_local(async move {
        let result = client.complete(turn.request()).await;
        match session.borrow_mut().complete_turn(turn, result) {
            SubmitOutcome::Replied(content) => {
                log::debug!("Reply received ({} chars)", content.chars().count());
            }
            SubmitOutcome::Failed(_) | SubmitOutcome::Busy => {}
        }
    });
}
