use beautybot_core::ChatSurface;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, ScrollBehavior, ScrollToOptions};

use crate::dom;

pub const CHAT_FORM_ID: &str = "chatForm";
pub const USER_INPUT_ID: &str = "userInput";
pub const CHAT_WINDOW_ID: &str = "chatWindow";
pub const GREETING_ID: &str = "init-text";
pub const THINKING_ID: &str = "think-bubble";

/// Gap kept between the top of the chat window and the latest prompt, in px
const SCROLL_MARGIN: f64 = 10.0;

/// Draws the conversation into `#chatWindow`
pub struct DomSurface {
    document: Document,
    form: Element,
    input: HtmlInputElement,
    chat_window: HtmlElement,
    latest_prompt: Option<Element>,
    thinking: Option<Element>,
}

impl DomSurface {
    pub fn attach(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            document: document.clone(),
            form: dom::get_element_by_id(document, CHAT_FORM_ID)?,
            input: dom::get_input_by_id(document, USER_INPUT_ID)?,
            chat_window: dom::get_html_element_by_id(document, CHAT_WINDOW_ID)?,
            latest_prompt: None,
            thinking: None,
        })
    }

    pub fn form(&self) -> &Element {
        &self.form
    }

    pub fn input(&self) -> &HtmlInputElement {
        &self.input
    }

    fn append_bubble(
        &self,
        outer_class: &str,
        inner_tag: &str,
        inner_class: &str,
    ) -> Result<(Element, Element), JsValue> {
        let (outer, inner) =
            dom::create_bubble(&self.document, outer_class, inner_tag, inner_class)?;
        self.chat_window.append_child(&outer)?;
        Ok((outer, inner))
    }

    fn try_show_greeting(&mut self, text: &str) -> Result<(), JsValue> {
        // Avoids odd spacing of the greeting
        dom::set_text_content(&self.chat_window, "");

        let greeting = dom::create_element_with_class(&self.document, "p", "reply-text")?;
        greeting.set_id(GREETING_ID);
        dom::set_text_content(&greeting, text);
        self.chat_window.append_child(&greeting)?;
        Ok(())
    }

    fn try_show_prompt(&mut self, text: &str) -> Result<(), JsValue> {
        let (bubble, body) = self.append_bubble("prompt-window", "p", "prompt-text")?;
        dom::set_text_content(&body, text);
        self.latest_prompt = Some(bubble);
        Ok(())
    }

    fn try_show_thinking(&mut self, text: &str) -> Result<(), JsValue> {
        let (bubble, body) = self.append_bubble("reply-window", "p", "reply-text")?;
        bubble.set_id(THINKING_ID);
        dom::set_text_content(&body, text);
        self.thinking = Some(bubble);
        Ok(())
    }

    fn try_show_reply(&mut self, html: &str) -> Result<(), JsValue> {
        let (_, body) = self.append_bubble("reply-window", "div", "reply-text")?;
        body.set_inner_html(html);
        Ok(())
    }

    fn try_show_error(&mut self, message: &str) -> Result<(), JsValue> {
        let (_, body) = self.append_bubble("reply-window", "p", "reply-text")?;
        dom::set_text_content(&body, message);
        Ok(())
    }
}

fn report(result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::error!("Failed to update chat window: {:?}", e);
    }
}

impl ChatSurface for DomSurface {
    fn show_greeting(&mut self, text: &str) {
        report(self.try_show_greeting(text));
    }

    fn remove_greeting(&mut self) {
        if let Some(greeting) = self.document.get_element_by_id(GREETING_ID) {
            greeting.remove();
        }
    }

    fn show_prompt(&mut self, text: &str) {
        report(self.try_show_prompt(text));
    }

    fn show_thinking(&mut self, text: &str) {
        report(self.try_show_thinking(text));
    }

    fn hide_thinking(&mut self) {
        if let Some(bubble) = self.thinking.take() {
            bubble.remove();
        }
    }

    fn show_reply(&mut self, _markdown: &str, html: &str) {
        report(self.try_show_reply(html));
    }

    fn show_error(&mut self, message: &str) {
        report(self.try_show_error(message));
    }

    /// Deferred until the new bubbles have been laid out
    fn scroll_to_latest_prompt(&mut self) {
        let Some(prompt) = self.latest_prompt.clone() else {
            return;
        };
        let chat_window = self.chat_window.clone();

        Timeout::new(0, move || {
            let container_top = chat_window.get_bounding_client_rect().top();
            let element_top = prompt.get_bounding_client_rect().top();
            let offset = element_top - container_top - SCROLL_MARGIN;

            let options = ScrollToOptions::new();
            options.set_top(f64::from(chat_window.scroll_top()) + offset);
            options.set_behavior(ScrollBehavior::Smooth);
            chat_window.scroll_to_with_scroll_to_options(&options);
        })
        .forget();
    }

    fn clear_input(&mut self) {
        self.input.set_value("");
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.input.set_disabled(!enabled);
        if let Some(button) = dom::find_button(&self.form) {
            button.set_disabled(!enabled);
        }
    }
}
