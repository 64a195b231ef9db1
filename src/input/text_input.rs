use crate::form::field::FieldId;
use crate::input::{Input, KeyResult};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;
use unicode_width::UnicodeWidthChar;

pub struct TextInput {
    id: FieldId,
    label: String,
    value: String,
    cursor_pos: usize,
    focused: bool,
}

impl TextInput {
    pub fn new(id: impl Into<FieldId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: String::new(),
            cursor_pos: 0,
            focused: false,
        }
    }

    fn byte_pos(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .map(|(i, _)| i)
            .nth(char_pos)
            .unwrap_or(self.value.len())
    }

    fn handle_char(&mut self, ch: char) {
        let at = self.byte_pos(self.cursor_pos);
        self.value.insert(at, ch);
        self.cursor_pos += 1;
    }

    fn handle_backspace(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }
        let at = self.byte_pos(self.cursor_pos - 1);
        self.value.remove(at);
        self.cursor_pos -= 1;
    }

    fn handle_delete(&mut self) {
        if self.cursor_pos >= self.value.chars().count() {
            return;
        }
        let at = self.byte_pos(self.cursor_pos);
        self.value.remove(at);
    }

    fn move_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    fn move_right(&mut self) {
        if self.cursor_pos < self.value.chars().count() {
            self.cursor_pos += 1;
        }
    }

    fn is_separator(ch: char) -> bool {
        ch.is_whitespace() || matches!(ch, '.' | '/' | ',' | '-' | '@')
    }

    fn move_word_left(&mut self) {
        let chars: Vec<char> = self.value.chars().collect();
        let mut pos = self.cursor_pos;

        while pos > 0 && chars.get(pos - 1).is_some_and(|c| Self::is_separator(*c)) {
            pos -= 1;
        }
        while pos > 0 && chars.get(pos - 1).is_some_and(|c| !Self::is_separator(*c)) {
            pos -= 1;
        }

        self.cursor_pos = pos;
    }

    fn move_word_right(&mut self) {
        let chars: Vec<char> = self.value.chars().collect();
        let mut pos = self.cursor_pos;

        while pos < chars.len() && chars.get(pos).is_some_and(|c| Self::is_separator(*c)) {
            pos += 1;
        }
        while pos < chars.len() && chars.get(pos).is_some_and(|c| !Self::is_separator(*c)) {
            pos += 1;
        }

        self.cursor_pos = pos;
    }

    fn delete_word_impl(&mut self) {
        let mut chars: Vec<char> = self.value.chars().collect();
        let mut pos = self.cursor_pos;

        while pos > 0 && chars.get(pos - 1).is_some_and(|c| Self::is_separator(*c)) {
            chars.remove(pos - 1);
            pos -= 1;
        }
        while pos > 0 && chars.get(pos - 1).is_some_and(|c| !Self::is_separator(*c)) {
            chars.remove(pos - 1);
            pos -= 1;
        }

        self.value = chars.into_iter().collect();
        self.cursor_pos = pos;
    }

    fn delete_word_forward_impl(&mut self) {
        let mut chars: Vec<char> = self.value.chars().collect();
        let pos = self.cursor_pos;

        while pos < chars.len() && chars.get(pos).is_some_and(|c| Self::is_separator(*c)) {
            chars.remove(pos);
        }
        while pos < chars.len() && chars.get(pos).is_some_and(|c| !Self::is_separator(*c)) {
            chars.remove(pos);
        }

        self.value = chars.into_iter().collect();
    }
}

impl Input for TextInput {
    fn id(&self) -> &FieldId {
        &self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: String) {
        self.cursor_pos = value.chars().count();
        self.value = value;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyResult {
        match code {
            KeyCode::Char(ch) if !modifiers.contains(KeyModifiers::CONTROL) => {
                self.handle_char(ch);
                KeyResult::Handled
            }
            KeyCode::Backspace => {
                self.handle_backspace();
                KeyResult::Handled
            }
            KeyCode::Delete => {
                self.handle_delete();
                KeyResult::Handled
            }
            KeyCode::Left => {
                if modifiers.contains(KeyModifiers::CONTROL) {
                    self.move_word_left();
                } else {
                    self.move_left();
                }
                KeyResult::Handled
            }
            KeyCode::Right => {
                if modifiers.contains(KeyModifiers::CONTROL) {
                    self.move_word_right();
                } else {
                    self.move_right();
                }
                KeyResult::Handled
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                KeyResult::Handled
            }
            KeyCode::End => {
                self.cursor_pos = self.value.chars().count();
                KeyResult::Handled
            }
            _ => KeyResult::NotHandled,
        }
    }

    fn render_content(&self) -> Span {
        Span::new(self.value.clone())
    }

    fn cursor_offset_in_content(&self) -> usize {
        self.value
            .chars()
            .take(self.cursor_pos)
            .map(|c| c.width().unwrap_or(0))
            .sum()
    }

    fn delete_word(&mut self) {
        self.delete_word_impl();
    }

    fn delete_word_forward(&mut self) {
        self.delete_word_forward_impl();
    }
}

#[cfg(test)]
mod tests {
    use super::TextInput;
    use crate::input::Input;
    use crate::terminal::{KeyCode, KeyModifiers};

    fn type_str(input: &mut TextInput, text: &str) {
        for ch in text.chars() {
            input.handle_key(KeyCode::Char(ch), KeyModifiers::NONE);
        }
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut input = TextInput::new("email", "Email Address");
        type_str(&mut input, "a@b.com");
        assert_eq!(input.value(), "a@b.com");
        assert_eq!(input.cursor_pos(), 7);
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let mut input = TextInput::new("email", "Email Address");
        type_str(&mut input, "abc");
        input.handle_key(KeyCode::Left, KeyModifiers::NONE);
        input.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(input.value(), "ac");
        assert_eq!(input.cursor_pos(), 1);
    }

    #[test]
    fn delete_word_stops_at_separator() {
        let mut input = TextInput::new("email", "Email Address");
        type_str(&mut input, "jane@doe.com");
        input.delete_word();
        assert_eq!(input.value(), "jane@doe.");
        input.delete_word();
        assert_eq!(input.value(), "jane@");
    }

    #[test]
    fn home_and_end_jump() {
        let mut input = TextInput::new("name", "Name");
        type_str(&mut input, "Jane");
        input.handle_key(KeyCode::Home, KeyModifiers::NONE);
        assert_eq!(input.cursor_pos(), 0);
        input.handle_key(KeyCode::End, KeyModifiers::NONE);
        assert_eq!(input.cursor_pos(), 4);
    }
}
