use crate::form::field::FieldId;
use crate::input::text_input::TextInput;
use crate::input::{Input, KeyResult};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;

/// Text input that renders one `*` per character.
pub struct PasswordInput {
    inner: TextInput,
}

impl PasswordInput {
    pub fn new(id: impl Into<FieldId>, label: impl Into<String>) -> Self {
        Self {
            inner: TextInput::new(id, label),
        }
    }

    fn masked_len(&self) -> usize {
        self.inner.value().chars().count()
    }
}

impl Input for PasswordInput {
    fn id(&self) -> &FieldId {
        self.inner.id()
    }

    fn label(&self) -> &str {
        self.inner.label()
    }

    fn value(&self) -> String {
        self.inner.value()
    }

    fn set_value(&mut self, value: String) {
        self.inner.set_value(value);
    }

    fn is_focused(&self) -> bool {
        self.inner.is_focused()
    }

    fn set_focused(&mut self, focused: bool) {
        self.inner.set_focused(focused);
    }

    fn cursor_pos(&self) -> usize {
        self.inner.cursor_pos()
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyResult {
        self.inner.handle_key(code, modifiers)
    }

    fn render_content(&self) -> Span {
        Span::new("*".repeat(self.masked_len()))
    }

    fn cursor_offset_in_content(&self) -> usize {
        // Mask cells are all width 1.
        self.inner.cursor_pos()
    }

    fn delete_word(&mut self) {
        self.inner.delete_word();
    }

    fn delete_word_forward(&mut self) {
        self.inner.delete_word_forward();
    }
}
