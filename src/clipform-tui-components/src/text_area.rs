//! Multi-line text input with a fixed viewport.
//!
//! Logical lines are wrapped by display width into visual rows; the
//! viewport shows `height` visual rows and scrolls to follow the cursor.

use crate::component::{Component, ComponentResult};
use crate::scroll::{ScrollState, render_scroll_indicators};
use crate::style::{ACCENT, SURFACE_1, SURFACE_2, TEXT, TEXT_DIM};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Default visible rows.
pub const DEFAULT_HEIGHT: u16 = 5;
/// Default width in cells.
pub const DEFAULT_WIDTH: u16 = 40;

/// State for a multi-line text area.
#[derive(Debug, Clone)]
pub struct TextAreaState {
    lines: Vec<String>,
    /// Cursor line
    row: usize,
    /// Cursor position in graphemes within `row`
    col: usize,
    width: u16,
    height: u16,
    scroll: ScrollState,
}

impl TextAreaState {
    /// Create a text area holding `text` with a `width` x `height` viewport.
    ///
    /// The cursor starts at the beginning of the text.
    pub fn new(text: &str, width: u16, height: u16) -> Self {
        let mut state = Self {
            lines: split_lines(text),
            row: 0,
            col: 0,
            width: width.max(1),
            height: height.max(1),
            scroll: ScrollState::new(0, height.max(1) as usize),
        };
        state.sync_scroll();
        state
    }

    /// The full text, lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Cursor as (line, grapheme column).
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Viewport size as (width, height).
    pub fn viewport(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Current scroll state of the viewport (in visual rows).
    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn insert(&mut self, c: char) {
        let offset = byte_offset(&self.lines[self.row], self.col);
        self.lines[self.row].insert(offset, c);
        self.col += 1;
        self.sync_scroll();
    }

    /// Split the current line at the cursor.
    pub fn insert_newline(&mut self) {
        let offset = byte_offset(&self.lines[self.row], self.col);
        let rest = self.lines[self.row].split_off(offset);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.col = 0;
        self.sync_scroll();
    }

    /// Insert text at the cursor (for paste).
    pub fn insert_str(&mut self, text: &str) {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let mut pieces = normalized.split('\n');
        if let Some(first) = pieces.next() {
            let offset = byte_offset(&self.lines[self.row], self.col);
            self.lines[self.row].insert_str(offset, first);
            self.col += first.graphemes(true).count();
        }
        for piece in pieces {
            self.insert_newline();
            let line = &mut self.lines[self.row];
            line.insert_str(0, piece);
            self.col = piece.graphemes(true).count();
        }
        self.sync_scroll();
    }

    /// Delete before the cursor, joining with the previous line at column 0.
    pub fn backspace(&mut self) {
        if self.col > 0 {
            let line = &mut self.lines[self.row];
            let start = byte_offset(line, self.col - 1);
            let end = byte_offset(line, self.col);
            line.replace_range(start..end, "");
            self.col -= 1;
        } else if self.row > 0 {
            let current = self.lines.remove(self.row);
            self.row -= 1;
            self.col = grapheme_len(&self.lines[self.row]);
            self.lines[self.row].push_str(&current);
        }
        self.sync_scroll();
    }

    /// Delete at the cursor, joining with the next line at end of line.
    pub fn delete(&mut self) {
        let len = grapheme_len(&self.lines[self.row]);
        if self.col < len {
            let line = &mut self.lines[self.row];
            let start = byte_offset(line, self.col);
            let end = byte_offset(line, self.col + 1);
            line.replace_range(start..end, "");
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&next);
        }
        self.sync_scroll();
    }

    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = grapheme_len(&self.lines[self.row]);
        }
        self.sync_scroll();
    }

    pub fn move_right(&mut self) {
        if self.col < grapheme_len(&self.lines[self.row]) {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
        self.sync_scroll();
    }

    /// Move to the previous line. Returns false when already on the first.
    pub fn move_up(&mut self) -> bool {
        if self.row == 0 {
            return false;
        }
        self.row -= 1;
        self.col = self.col.min(grapheme_len(&self.lines[self.row]));
        self.sync_scroll();
        true
    }

    /// Move to the next line. Returns false when already on the last.
    pub fn move_down(&mut self) -> bool {
        if self.row + 1 >= self.lines.len() {
            return false;
        }
        self.row += 1;
        self.col = self.col.min(grapheme_len(&self.lines[self.row]));
        self.sync_scroll();
        true
    }

    pub fn move_home(&mut self) {
        self.col = 0;
        self.sync_scroll();
    }

    pub fn move_end(&mut self) {
        self.col = grapheme_len(&self.lines[self.row]);
        self.sync_scroll();
    }

    /// Remove all text.
    pub fn clear(&mut self) {
        self.lines = vec![String::new()];
        self.row = 0;
        self.col = 0;
        self.sync_scroll();
    }

    /// All visual rows as (line index, text) after wrapping.
    pub fn visual_rows(&self) -> Vec<(usize, String)> {
        let mut rows = Vec::new();
        for (idx, line) in self.lines.iter().enumerate() {
            for (start, end) in wrap_ranges(line, self.width as usize) {
                let text: String = line.graphemes(true).skip(start).take(end - start).collect();
                rows.push((idx, text));
            }
        }
        rows
    }

    /// Cursor position in the wrapped layout as (visual row, cell column).
    pub fn visual_cursor(&self) -> (usize, u16) {
        let mut visual_row = 0;
        for line in &self.lines[..self.row] {
            visual_row += wrap_ranges(line, self.width as usize).len();
        }

        let line = &self.lines[self.row];
        let ranges = wrap_ranges(line, self.width as usize);
        let last = ranges.len() - 1;
        for (i, (start, end)) in ranges.iter().enumerate() {
            if self.col < *end || i == last {
                let before: String = line
                    .graphemes(true)
                    .skip(*start)
                    .take(self.col - start)
                    .collect();
                return (visual_row + i, before.width() as u16);
            }
        }
        (visual_row, 0)
    }

    fn sync_scroll(&mut self) {
        let total: usize = self
            .lines
            .iter()
            .map(|l| wrap_ranges(l, self.width as usize).len())
            .sum();
        self.scroll.set_total(total);
        let (row, _) = self.visual_cursor();
        self.scroll.ensure_visible(row);
    }
}

impl Default for TextAreaState {
    fn default() -> Self {
        Self::new("", DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

fn split_lines(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n");
    normalized.split('\n').map(str::to_string).collect()
}

fn grapheme_len(s: &str) -> usize {
    s.graphemes(true).count()
}

fn byte_offset(s: &str, grapheme_idx: usize) -> usize {
    s.grapheme_indices(true)
        .nth(grapheme_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Grapheme ranges of `line` that each fit in `width` cells.
///
/// Rows break after whitespace; a word wider than `width` is split by
/// grapheme. Whitespace at a break stays on the row it ends, like a
/// word-wrapping text widget. Always returns at least one range so empty
/// lines still occupy a row.
fn wrap_ranges(line: &str, width: usize) -> Vec<(usize, usize)> {
    let width = width.max(1);
    let graphemes: Vec<&str> = line.graphemes(true).collect();
    let mut ranges = Vec::new();
    let mut start = 0;
    let mut used = 0;
    // First grapheme after the latest whitespace in the current row.
    let mut word_start = 0;
    for (i, g) in graphemes.iter().enumerate() {
        let w = g.width();
        let blank = g.chars().all(char::is_whitespace);
        if used + w > width && i > start && !blank {
            let cut = if word_start > start { word_start } else { i };
            ranges.push((start, cut));
            start = cut;
            used = graphemes[cut..i].iter().map(|g| g.width()).sum();
        }
        used += w;
        if blank {
            word_start = i + 1;
        }
    }
    ranges.push((start, graphemes.len()));
    ranges
}

/// Multi-line text area widget.
pub struct TextArea<'a> {
    state: &'a TextAreaState,
    focused: bool,
}

impl<'a> TextArea<'a> {
    pub fn new(state: &'a TextAreaState) -> Self {
        Self {
            state,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for TextArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let bg = if self.focused { SURFACE_2 } else { SURFACE_1 };
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(' ').set_style(Style::default().bg(bg));
                }
            }
        }

        let rows = self.state.visual_rows();
        let offset = self.state.scroll.offset();
        for (i, (_, text)) in rows
            .iter()
            .skip(offset)
            .take(area.height as usize)
            .enumerate()
        {
            buf.set_stringn(
                area.x,
                area.y + i as u16,
                text,
                area.width as usize,
                Style::default().fg(TEXT).bg(bg),
            );
        }

        if self.focused {
            let (vrow, vcol) = self.state.visual_cursor();
            if vrow >= offset && vrow < offset + area.height as usize {
                let x = (area.x + vcol).min(area.right().saturating_sub(1));
                let y = area.y + (vrow - offset) as u16;
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_bg(ACCENT).set_fg(SURFACE_1);
                }
            }
        }

        render_scroll_indicators(area, buf, &self.state.scroll, Style::default().fg(TEXT_DIM).bg(bg));
    }
}

/// Interactive multi-line input.
#[derive(Debug, Clone, Default)]
pub struct MultiLineInput {
    /// State
    pub state: TextAreaState,
    focused: bool,
}

impl MultiLineInput {
    /// Create a text area holding `text` with a `width` x `height` viewport.
    pub fn new(text: &str, width: u16, height: u16) -> Self {
        Self {
            state: TextAreaState::new(text, width, height),
            focused: false,
        }
    }

    /// The live content.
    pub fn value(&self) -> String {
        self.state.text()
    }
}

impl Component for MultiLineInput {
    type Output = ();

    fn render(&self, area: Rect, buf: &mut Buffer) {
        TextArea::new(&self.state)
            .focused(self.focused)
            .render(area, buf);
    }

    /// Up on the first line and Down on the last are left to the parent
    /// so focus can leave the text area with the arrow keys.
    fn handle_key(&mut self, key: KeyEvent) -> ComponentResult<Self::Output> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => ComponentResult::Cancelled,
            KeyCode::Enter => {
                self.state.insert_newline();
                ComponentResult::Handled
            }
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
            KeyCode::Up => {
                if self.state.move_up() {
                    ComponentResult::Handled
                } else {
                    ComponentResult::NotHandled
                }
            }
            KeyCode::Down => {
                if self.state.move_down() {
                    ComponentResult::Handled
                } else {
                    ComponentResult::NotHandled
                }
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
        vec![("Enter", "New line"), ("Ctrl+U", "Clear")]
    }

    fn handle_paste(&mut self, text: &str) -> bool {
        self.state.insert_str(text);
        true
    }

    fn natural_size(&self) -> (u16, u16) {
        self.state.viewport()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_round_trips_text() {
        let state = TextAreaState::new("Dear Sir,\n\nThanks.", 40, 5);
        assert_eq!(state.lines().len(), 3);
        assert_eq!(state.text(), "Dear Sir,\n\nThanks.");
        assert_eq!(state.cursor(), (0, 0));
    }

    #[test]
    fn test_crlf_is_normalized() {
        let state = TextAreaState::new("a\r\nb", 40, 5);
        assert_eq!(state.text(), "a\nb");
    }

    #[test]
    fn test_newline_splits_and_backspace_joins() {
        let mut state = TextAreaState::new("HelloWorld", 40, 5);
        for _ in 0..5 {
            state.move_right();
        }
        state.insert_newline();
        assert_eq!(state.text(), "Hello\nWorld");
        assert_eq!(state.cursor(), (1, 0));

        state.backspace();
        assert_eq!(state.text(), "HelloWorld");
        assert_eq!(state.cursor(), (0, 5));
    }

    #[test]
    fn test_delete_at_end_joins_next_line() {
        let mut state = TextAreaState::new("ab\ncd", 40, 5);
        state.move_end();
        state.delete();
        assert_eq!(state.text(), "abcd");
    }

    #[test]
    fn test_up_down_clamp_column() {
        let mut state = TextAreaState::new("long line\nab", 40, 5);
        state.move_end();
        assert!(state.move_down());
        assert_eq!(state.cursor(), (1, 2));
        assert!(!state.move_down());
        assert!(state.move_up());
        assert_eq!(state.cursor(), (0, 2));
        assert!(!state.move_up());
    }

    #[test]
    fn test_paste_multiple_lines() {
        let mut state = TextAreaState::new("", 40, 5);
        state.insert_str("one\r\ntwo\nthree");
        assert_eq!(state.text(), "one\ntwo\nthree");
        assert_eq!(state.cursor(), (2, 5));
    }

    #[test]
    fn test_wrapping_by_width() {
        let state = TextAreaState::new("abcdefghij", 4, 5);
        let rows: Vec<String> = state.visual_rows().into_iter().map(|(_, t)| t).collect();
        assert_eq!(rows, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrapping_keeps_words_whole() {
        let state = TextAreaState::new("Dear Sir or Madam", 10, 5);
        let rows: Vec<String> = state.visual_rows().into_iter().map(|(_, t)| t).collect();
        assert_eq!(rows, vec!["Dear Sir ", "or Madam"]);

        // Whitespace at the edge hangs on its row instead of opening a new one.
        let state = TextAreaState::new("hello world", 5, 5);
        let rows: Vec<String> = state.visual_rows().into_iter().map(|(_, t)| t).collect();
        assert_eq!(rows, vec!["hello ", "world"]);
    }

    #[test]
    fn test_long_word_splits_after_words() {
        let state = TextAreaState::new("to abcdefghij", 4, 5);
        let rows: Vec<String> = state.visual_rows().into_iter().map(|(_, t)| t).collect();
        assert_eq!(rows, vec!["to ", "abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_visual_cursor_on_word_boundary() {
        let mut state = TextAreaState::new("hello world", 5, 5);
        for _ in 0..6 {
            state.move_right();
        }
        // Past the hanging space: start of "world".
        assert_eq!(state.visual_cursor(), (1, 0));
        state.move_left();
        assert_eq!(state.visual_cursor(), (0, 5));
    }

    #[test]
    fn test_visual_cursor_follows_wrap() {
        let mut state = TextAreaState::new("abcdefghij", 4, 5);
        for _ in 0..5 {
            state.move_right();
        }
        // 'f' is the second grapheme of the second visual row
        assert_eq!(state.visual_cursor(), (1, 1));
        state.move_end();
        assert_eq!(state.visual_cursor(), (2, 2));
    }

    #[test]
    fn test_viewport_scrolls_to_cursor() {
        let text = (1..=8).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        let mut state = TextAreaState::new(&text, 40, 5);
        assert_eq!(state.scroll().offset(), 0);

        for _ in 0..7 {
            state.move_down();
        }
        assert_eq!(state.cursor().0, 7);
        assert_eq!(state.scroll().offset(), 3);
        assert!(state.scroll().is_visible(7));
    }

    #[test]
    fn test_multi_line_input_arrow_escape() {
        let mut input = MultiLineInput::new("only line", 40, 5);
        let up = input.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        assert_eq!(up, ComponentResult::NotHandled);

        let enter = input.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(enter, ComponentResult::Handled);
        assert_eq!(input.value(), "\nonly line");
    }

    #[test]
    fn test_text_area_renders_rows() {
        let state = TextAreaState::new("Dear Sir\nRegards", 20, 3);
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        TextArea::new(&state).render(area, &mut buf);

        let row = |y: u16| -> String {
            (0..20)
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect::<String>()
                .trim_end()
                .to_string()
        };
        assert_eq!(row(0), "Dear Sir");
        assert_eq!(row(1), "Regards");
        assert_eq!(row(2), "");
    }
}
