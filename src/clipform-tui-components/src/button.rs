//! Push button.

use crate::style::{ACCENT, SURFACE_1, TEXT, VOID};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

/// A bracketed, single-row button such as `[ Copy ]`.
#[derive(Debug, Clone)]
pub struct CopyButton<'a> {
    label: &'a str,
    focused: bool,
}

impl<'a> CopyButton<'a> {
    pub const DEFAULT_LABEL: &'static str = "Copy";

    pub fn new() -> Self {
        Self::with_label(Self::DEFAULT_LABEL)
    }

    pub fn with_label(label: &'a str) -> Self {
        Self {
            label,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Cells the button occupies.
    pub fn width(&self) -> u16 {
        (self.label.width() + 4) as u16
    }
}

impl Default for CopyButton<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for CopyButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let style = if self.focused {
            Style::default()
                .fg(VOID)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT).bg(SURFACE_1)
        };
        let text = format!("[ {} ]", self.label);
        buf.set_stringn(area.x, area.y, text, area.width as usize, style);
    }
}
