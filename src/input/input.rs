use crate::form::field::FieldId;
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    Handled,
    NotHandled,
}

/// One editable field on a screen. Inputs own their value and cursor only;
/// validation errors are tracked by the owning form.
pub trait Input: Send {
    fn id(&self) -> &FieldId;
    fn label(&self) -> &str;

    fn value(&self) -> String;
    fn set_value(&mut self, value: String);

    fn is_focused(&self) -> bool;
    fn set_focused(&mut self, focused: bool);

    /// Cursor position in characters within the value.
    fn cursor_pos(&self) -> usize;

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyResult;

    /// What the field displays, which may differ from the value (masking).
    fn render_content(&self) -> Span;

    /// Cursor column within the rendered content, in display cells.
    fn cursor_offset_in_content(&self) -> usize;

    fn delete_word(&mut self) {}
    fn delete_word_forward(&mut self) {}
}
