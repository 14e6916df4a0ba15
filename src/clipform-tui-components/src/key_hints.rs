//! Footer bar of keyboard shortcuts: `Tab Next · Enter Copy · Esc Quit`.

use crate::style::{ACCENT, SURFACE_1, TEXT_DIM};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    pub key: String,
    pub description: String,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
        }
    }

    /// Cells needed for `key description`.
    fn width(&self) -> usize {
        self.key.width() + 1 + self.description.width()
    }
}

impl From<(&str, &str)> for KeyHint {
    fn from((key, description): (&str, &str)) -> Self {
        Self::new(key, description)
    }
}

/// A single-row bar of key hints.
///
/// Hints that don't fit the available width are dropped from the end.
#[derive(Debug, Clone)]
pub struct KeyHintsBar {
    hints: Vec<KeyHint>,
    separator: String,
}

impl KeyHintsBar {
    pub fn new() -> Self {
        Self {
            hints: Vec::new(),
            separator: " · ".to_string(),
        }
    }

    pub fn from_tuples(hints: &[(&str, &str)]) -> Self {
        Self::new().hints(hints.iter().map(|&h| KeyHint::from(h)))
    }

    pub fn hint(mut self, key: impl Into<String>, description: impl Into<String>) -> Self {
        self.hints.push(KeyHint::new(key, description));
        self
    }

    pub fn hints(mut self, hints: impl IntoIterator<Item = KeyHint>) -> Self {
        self.hints.extend(hints);
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// The leading hints whose combined width fits in `max_width`.
    fn fitting(&self, max_width: usize) -> &[KeyHint] {
        let mut used = 0;
        for (i, hint) in self.hints.iter().enumerate() {
            let needed = if i == 0 {
                hint.width()
            } else {
                self.separator.width() + hint.width()
            };
            if used + needed > max_width {
                return &self.hints[..i];
            }
            used += needed;
        }
        &self.hints
    }
}

impl Default for KeyHintsBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for KeyHintsBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width < 2 {
            return;
        }

        let bg = Style::default().bg(SURFACE_1);
        for x in area.x..area.right() {
            if let Some(cell) = buf.cell_mut((x, area.y)) {
                cell.set_char(' ').set_style(bg);
            }
        }

        let key_style = Style::default().fg(ACCENT).bg(SURFACE_1);
        let dim_style = Style::default().fg(TEXT_DIM).bg(SURFACE_1);

        // one cell of padding on the left
        let mut x = area.x + 1;
        let right = area.right();
        let width = (right - x) as usize;
        for (i, hint) in self.fitting(width).iter().enumerate() {
            if i > 0 {
                x = buf.set_stringn(x, area.y, &self.separator, (right - x) as usize, dim_style).0;
            }
            x = buf.set_stringn(x, area.y, &hint.key, (right - x) as usize, key_style).0;
            x = buf.set_stringn(x, area.y, " ", (right - x) as usize, dim_style).0;
            x = buf
                .set_stringn(x, area.y, &hint.description, (right - x) as usize, dim_style)
                .0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(buf: &Buffer, width: u16) -> String {
        (0..width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn test_hints_render_in_order() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        KeyHintsBar::from_tuples(&[("Tab", "Next"), ("Esc", "Quit")]).render(area, &mut buf);
        assert_eq!(row(&buf, 40), " Tab Next · Esc Quit");
    }

    #[test]
    fn test_overflowing_hints_are_dropped() {
        let bar = KeyHintsBar::new()
            .hint("Tab", "Next")
            .hint("Enter", "Copy")
            .hint("Esc", "Quit");
        assert_eq!(bar.fitting(10).len(), 1);
        assert_eq!(bar.fitting(100).len(), 3);
        assert!(bar.fitting(3).is_empty());
    }
}
