use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::nav::Message;

/// How a prompt screen resolved. `Empty` (Enter on a blank line) and
/// `Cancelled` (Esc) are distinct: most screens treat both as "go back",
/// but the drill advances on one and unwinds the round on the other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptOutcome {
    Submitted(String),
    Empty,
    Cancelled,
}

/// State of one line-input screen: a title, informational messages, a
/// prompt label and a single editable line. The submitted text is raw —
/// trimming is per-field caller policy.
pub struct PromptState {
    pub title: String,
    pub prompt: String,
    pub messages: Vec<Message>,
    input: LineInput,
}

impl PromptState {
    pub fn new(
        title: impl Into<String>,
        prompt: impl Into<String>,
        messages: Vec<Message>,
    ) -> Self {
        Self {
            title: title.into(),
            prompt: prompt.into(),
            messages,
            input: LineInput::new(),
        }
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    /// (before_cursor, cursor_char, after_cursor) for styled rendering.
    pub fn render_parts(&self) -> (&str, Option<char>, &str) {
        self.input.render_parts()
    }

    pub fn handle(&mut self, key: KeyEvent) -> Option<PromptOutcome> {
        match self.input.handle(key) {
            InputResult::Continue => None,
            InputResult::Cancel => Some(PromptOutcome::Cancelled),
            InputResult::Submit => {
                if self.input.value().is_empty() {
                    Some(PromptOutcome::Empty)
                } else {
                    Some(PromptOutcome::Submitted(self.input.value().to_string()))
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InputResult {
    Continue,
    Submit,
    Cancel,
}

/// Minimal single-line editor with readline-style control keys.
struct LineInput {
    text: String,
    /// Cursor position as a char index (0 = before first char).
    cursor: usize,
}

impl LineInput {
    fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
        }
    }

    fn value(&self) -> &str {
        &self.text
    }

    fn render_parts(&self) -> (&str, Option<char>, &str) {
        if self.cursor >= self.text.chars().count() {
            return (&self.text, None, "");
        }
        let byte_offset = self.char_to_byte(self.cursor);
        let ch = match self.text[byte_offset..].chars().next() {
            Some(ch) => ch,
            None => return (&self.text, None, ""),
        };
        let next_byte = byte_offset + ch.len_utf8();
        (&self.text[..byte_offset], Some(ch), &self.text[next_byte..])
    }

    fn handle(&mut self, key: KeyEvent) -> InputResult {
        match key.code {
            KeyCode::Esc => return InputResult::Cancel,
            KeyCode::Enter => return InputResult::Submit,

            KeyCode::Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
            }
            KeyCode::Right => {
                let len = self.text.chars().count();
                if self.cursor < len {
                    self.cursor += 1;
                }
            }
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.text.chars().count(),
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.remove_char_at(self.cursor - 1);
                    self.cursor -= 1;
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.text.chars().count() {
                    self.remove_char_at(self.cursor);
                }
            }
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.cursor = 0;
            }
            KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.cursor = self.text.chars().count();
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.text.clear();
                self.cursor = 0;
            }
            KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.delete_word_back();
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let byte_offset = self.char_to_byte(self.cursor);
                self.text.insert(byte_offset, ch);
                self.cursor += 1;
            }
            _ => {}
        }
        InputResult::Continue
    }

    fn char_to_byte(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(byte, _)| byte)
            .unwrap_or(self.text.len())
    }

    fn remove_char_at(&mut self, char_index: usize) {
        let byte_offset = self.char_to_byte(char_index);
        if let Some(ch) = self.text[byte_offset..].chars().next() {
            self.text
                .replace_range(byte_offset..byte_offset + ch.len_utf8(), "");
        }
    }

    fn delete_word_back(&mut self) {
        let mut chars: Vec<char> = self.text.chars().collect();
        let mut index = self.cursor;
        while index > 0 && chars[index - 1].is_whitespace() {
            index -= 1;
        }
        while index > 0 && !chars[index - 1].is_whitespace() {
            index -= 1;
        }
        chars.drain(index..self.cursor);
        self.text = chars.into_iter().collect();
        self.cursor = index;
    }
}
