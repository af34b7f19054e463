use beautybot_core::ChatConfig;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

mod dom;
mod fetch;
mod surface;
mod widget;

pub use fetch::FetchCompletionClient;
pub use surface::DomSurface;
pub use widget::ChatWidget;

/// Initialize the WASM application
/// This sets up panic hooks and logging
#[wasm_bindgen(start)]
pub fn init() {
    // Set panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    wasm_logger::init(wasm_logger::Config::default());

    log::info!("beautybot WASM initialized");
}

/// Mount the chat widget on `#chatForm`, `#userInput` and `#chatWindow`.
///
/// `config_json` optionally overrides the defaults, e.g.
/// `{"endpoint": "https://my-worker.example.dev/"}`.
#[wasm_bindgen]
pub fn init_chat_widget(config_json: Option<String>) -> Result<(), JsValue> {
    let config = match config_json {
        Some(json) => ChatConfig::from_json_str(&json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?,
        None => ChatConfig::default(),
    };

    log::info!("Mounting chat widget for {}", config.endpoint);
    ChatWidget::mount(&document()?, config)?.start()
}

/// Get the window object
fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window object"))
}

/// Get the document object
fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("No document object"))
}
