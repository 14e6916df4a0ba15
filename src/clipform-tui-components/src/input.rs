//! Single-line text input.

use crate::component::{Component, ComponentResult};
use crate::style::{ACCENT, SURFACE_1, SURFACE_2, TEXT};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// State for a text input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    /// Current text value
    pub value: String,
    /// Cursor position (in graphemes)
    pub cursor: usize,
}

impl InputState {
    /// Create new input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial value; the cursor goes to the end.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        let v = value.into();
        self.cursor = v.graphemes(true).count();
        self.value = v;
        self
    }

    /// Insert a character at the cursor.
    pub fn insert(&mut self, c: char) {
        let byte_offset = self.grapheme_to_byte_offset(self.cursor);
        self.value.insert(byte_offset, c);
        self.cursor += 1;
    }

    /// Insert text at cursor (for paste). Line breaks become spaces.
    pub fn insert_str(&mut self, text: &str) {
        let flat: String = text
            .replace("\r\n", " ")
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        let byte_offset = self.grapheme_to_byte_offset(self.cursor);
        self.value.insert_str(byte_offset, &flat);
        self.cursor += flat.graphemes(true).count();
    }

    /// Delete the grapheme before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let new_cursor = self.cursor - 1;
            let start_byte = self.grapheme_to_byte_offset(new_cursor);
            let end_byte = self.grapheme_to_byte_offset(self.cursor);
            self.value.replace_range(start_byte..end_byte, "");
            self.cursor = new_cursor;
        }
    }

    /// Delete the grapheme at the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let start_byte = self.grapheme_to_byte_offset(self.cursor);
            let end_byte = self.grapheme_to_byte_offset(self.cursor + 1);
            self.value.replace_range(start_byte..end_byte, "");
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    /// Clear the input.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Length in graphemes.
    pub fn len(&self) -> usize {
        self.value.graphemes(true).count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// First grapheme to draw so the cursor stays inside `width` cells.
    pub fn scroll_start(&self, width: usize) -> usize {
        if width == 0 {
            return self.cursor;
        }
        let graphemes: Vec<&str> = self.value.graphemes(true).collect();
        let mut start = 0;
        // Width of graphemes from start up to the cursor, plus one cell for the cursor itself.
        while start < self.cursor {
            let used: usize = graphemes[start..self.cursor]
                .iter()
                .map(|g| g.width())
                .sum();
            if used < width {
                break;
            }
            start += 1;
        }
        start
    }

    fn grapheme_to_byte_offset(&self, grapheme_idx: usize) -> usize {
        self.value
            .grapheme_indices(true)
            .nth(grapheme_idx)
            .map(|(byte_idx, _)| byte_idx)
            .unwrap_or(self.value.len())
    }
}

/// A single-line text input widget.
pub struct TextInput<'a> {
    state: &'a InputState,
    focused: bool,
}

impl<'a> TextInput<'a> {
    /// Create a new text input widget.
    pub fn new(state: &'a InputState) -> Self {
        Self {
            state,
            focused: false,
        }
    }

    /// Set whether the input is focused.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for TextInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let bg = if self.focused { SURFACE_2 } else { SURFACE_1 };
        for col in area.x..area.right() {
            if let Some(cell) = buf.cell_mut((col, area.y)) {
                cell.set_char(' ').set_style(Style::default().bg(bg));
            }
        }

        let start = self.state.scroll_start(area.width as usize);
        let visible: String = self.state.value.graphemes(true).skip(start).collect();
        buf.set_stringn(
            area.x,
            area.y,
            &visible,
            area.width as usize,
            Style::default().fg(TEXT).bg(bg),
        );

        if self.focused {
            let before: String = self
                .state
                .value
                .graphemes(true)
                .skip(start)
                .take(self.state.cursor - start)
                .collect();
            let cursor_x = area.x.saturating_add(u16::try_from(before.width()).unwrap_or(u16::MAX));
            if let Some(cell) = buf.cell_mut((cursor_x, area.y)).filter(|_| cursor_x < area.right()) {
                cell.set_bg(ACCENT).set_fg(SURFACE_1);
            }
        }
    }
}

/// Interactive single-line input.
#[derive(Debug, Clone, Default)]
pub struct LineInput {
    /// State
    pub state: InputState,
    focused: bool,
    min_width: u16,
}

impl LineInput {
    /// Create an input holding `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            state: InputState::new().with_value(value),
            focused: false,
            min_width: 20,
        }
    }

    /// Minimum display width in cells.
    pub fn with_min_width(mut self, width: u16) -> Self {
        self.min_width = width;
        self
    }

    /// The live content.
    pub fn value(&self) -> &str {
        &self.state.value
    }
}

impl Component for LineInput {
    type Output = String;

    fn render(&self, area: Rect, buf: &mut Buffer) {
        TextInput::new(&self.state)
            .focused(self.focused)
            .render(area, buf);
    }

    fn handle_key(&mut self, key: KeyEvent) -> ComponentResult<Self::Output> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => ComponentResult::Done(self.state.value.clone()),
            KeyCode::Esc => ComponentResult::Cancelled,
            KeyCode::Backspace => {
                self.state.backspace();
                ComponentResult::Handled
            }
            KeyCode::Delete => {
                self.state.delete();
                ComponentResult::Handled
            }
            KeyCode::Left => {
                self.state.move_left();
                ComponentResult::Handled
            }
            KeyCode::Right => {
                self.state.move_right();
                ComponentResult::Handled
            }
            KeyCode::Home => {
                self.state.move_home();
                ComponentResult::Handled
            }
            KeyCode::End => {
                self.state.move_end();
                ComponentResult::Handled
            }
            KeyCode::Char('u') if ctrl => {
                self.state.clear();
                ComponentResult::Handled
            }
            KeyCode::Char(c) if !ctrl => {
                self.state.insert(c);
                ComponentResult::Handled
            }
            _ => ComponentResult::NotHandled,
        }
    }

    fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        vec![("Ctrl+U", "Clear"), ("Enter", "To Copy")]
    }

    fn handle_paste(&mut self, text: &str) -> bool {
        self.state.insert_str(text);
        true
    }

    fn natural_size(&self) -> (u16, u16) {
        let width = u16::try_from(self.state.value.width())
            .unwrap_or(u16::MAX)
            .saturating_add(1);
        (width.max(self.min_width), 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_input_state_basic() {
        let mut state = InputState::new();

        state.insert('H');
        state.insert('i');
        assert_eq!(state.value, "Hi");
        assert_eq!(state.cursor, 2);

        state.backspace();
        assert_eq!(state.value, "H");
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn test_input_state_navigation() {
        let mut state = InputState::new().with_value("Hello");
        assert_eq!(state.cursor, 5);

        state.move_left();
        assert_eq!(state.cursor, 4);

        state.move_home();
        assert_eq!(state.cursor, 0);
        state.move_left();
        assert_eq!(state.cursor, 0);

        state.move_end();
        assert_eq!(state.cursor, 5);
    }

    #[test]
    fn test_input_state_paste_flattens_newlines() {
        let mut state = InputState::new().with_value("Hello");
        state.move_home();
        state.insert_str("Oh\r\nno ");
        assert_eq!(state.value, "Oh no Hello");
        assert_eq!(state.cursor, 6);
    }

    #[test]
    fn test_input_state_graphemes() {
        let mut state = InputState::new().with_value("héllo");
        state.move_home();
        state.move_right();
        state.delete();
        assert_eq!(state.value, "hllo");
    }

    #[test]
    fn test_scroll_start_keeps_cursor_visible() {
        let state = InputState::new().with_value("abcdefghij");
        // cursor at 10, 5 cells wide: show "ghij" plus the cursor cell
        assert_eq!(state.scroll_start(5), 6);

        let mut short = InputState::new().with_value("abc");
        short.move_home();
        assert_eq!(short.scroll_start(5), 0);
    }

    #[test]
    fn test_line_input_edit_sequence() {
        let mut input = LineInput::new("Alice");
        input.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        for c in "Bob".chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(input.value(), "Bob");
        assert_eq!(
            input.handle_key(key(KeyCode::Enter)),
            ComponentResult::Done("Bob".to_string())
        );
    }

    #[test]
    fn test_line_input_ignores_ctrl_chars() {
        let mut input = LineInput::new("x");
        let result = input.handle_key(KeyEvent::new(KeyCode::Char('y'), KeyModifiers::CONTROL));
        assert_eq!(result, ComponentResult::NotHandled);
        assert_eq!(input.value(), "x");
    }

    #[test]
    fn test_line_input_natural_size() {
        assert_eq!(LineInput::new("").natural_size(), (20, 1));
        let long = "x".repeat(30);
        assert_eq!(LineInput::new(long).natural_size(), (31, 1));
        let huge = "x".repeat(70_000);
        assert_eq!(LineInput::new(huge).natural_size(), (u16::MAX, 1));
    }

    #[test]
    fn test_text_input_renders_value() {
        let state = InputState::new().with_value("Alice");
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        TextInput::new(&state).render(area, &mut buf);

        let rendered: String = (0..5).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert_eq!(rendered, "Alice");
    }
}
