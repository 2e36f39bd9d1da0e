use ratatui::style::{Color, Style};
use tui_textarea::{CursorMove, Input, Key, TextArea};

const PLACEHOLDER: &str = "IFSC, MICR, bank name, city or branch";

/// Single-line search field
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(PLACEHOLDER);
        textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));

        Self { textarea }
    }

    pub fn query(&self) -> &str {
        self.textarea.lines().first().map(String::as_str).unwrap_or("")
    }

    /// Replace the whole text and leave the cursor at the end
    pub fn set_text(&mut self, value: &str) {
        self.clear();
        self.textarea.insert_str(single_line(value));
    }

    pub fn clear(&mut self) {
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
    }

    /// Feed a key to the editor. Returns true when the text changed.
    ///
    /// Line breaks are swallowed so the field never grows a second line.
    pub fn handle_input(&mut self, input: impl Into<Input>) -> bool {
        let input = input.into();
        if inserts_newline(&input) {
            return false;
        }
        let before = self.query().to_string();
        self.textarea.input(input);
        self.query() != before
    }

    /// Insert pasted text at the cursor. Returns true when the text changed.
    pub fn paste(&mut self, text: &str) -> bool {
        let text = single_line(text);
        if text.is_empty() {
            return false;
        }
        self.textarea.insert_str(text)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

fn inserts_newline(input: &Input) -> bool {
    match input.key {
        Key::Enter => true,
        Key::Char('m') | Key::Char('j') => input.ctrl,
        _ => false,
    }
}

fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
