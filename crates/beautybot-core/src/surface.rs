/// Where a chat session draws the conversation.
///
/// The session calls these in conversation order; a surface never has to
/// look at the history itself.
pub trait ChatSurface {
    /// Initial greeting shown before the first prompt
    fn show_greeting(&mut self, text: &str);

    fn remove_greeting(&mut self);

    /// User prompt, shown as plain text. Becomes the scroll anchor.
    fn show_prompt(&mut self, text: &str);

    fn show_thinking(&mut self, text: &str);

    fn hide_thinking(&mut self);

    /// Assistant reply; `html` is `markdown` already rendered and sanitized
    fn show_reply(&mut self, markdown: &str, html: &str);

    fn show_error(&mut self, message: &str);

    fn scroll_to_latest_prompt(&mut self) {}

    fn clear_input(&mut self) {}

    fn set_input_enabled(&mut self, _enabled: bool) {}
}
