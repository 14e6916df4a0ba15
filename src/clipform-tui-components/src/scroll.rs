//! Scroll offsets for anything taller than its viewport.
//!
//! Units are rows: visual text rows for a text area, terminal rows for the
//! form body, entries for the file picker.

use crate::style::{SURFACE_1, TEXT_MUTED};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget};
use std::ops::Range;

/// Offset of a viewport over `total` rows, `visible` of which fit at once.
///
/// # Example
///
/// ```rust
/// use clipform_tui_components::scroll::ScrollState;
///
/// let mut scroll = ScrollState::new(40, 30);
/// scroll.scroll_down(100);
/// assert_eq!(scroll.offset(), 10);
///
/// scroll.ensure_visible(0);
/// assert_eq!(scroll.offset(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollState {
    total: usize,
    visible: usize,
    offset: usize,
}

impl ScrollState {
    pub fn new(total: usize, visible: usize) -> Self {
        Self {
            total,
            visible,
            offset: 0,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    /// Largest valid offset.
    pub fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.visible)
    }

    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.clamp();
    }

    pub fn set_visible(&mut self, visible: usize) {
        self.visible = visible;
        self.clamp();
    }

    pub fn set_offset(&mut self, offset: usize) {
        self.offset = offset;
        self.clamp();
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.offset = self.offset.saturating_sub(rows);
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.offset = self.offset.saturating_add(rows);
        self.clamp();
    }

    /// Scroll by one viewport, keeping one row of overlap.
    pub fn page_up(&mut self) {
        self.scroll_up(self.page_step());
    }

    /// Scroll by one viewport, keeping one row of overlap.
    pub fn page_down(&mut self) {
        self.scroll_down(self.page_step());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Adjust the offset so row `index` is inside the viewport.
    pub fn ensure_visible(&mut self, index: usize) {
        if self.visible == 0 {
            return;
        }
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + self.visible {
            self.offset = index + 1 - self.visible;
        }
        self.clamp();
    }

    /// Adjust the offset so the rows `start..start + len` are visible.
    ///
    /// When the span is taller than the viewport its top row wins.
    pub fn ensure_span_visible(&mut self, start: usize, len: usize) {
        if len == 0 {
            return self.ensure_visible(start);
        }
        self.ensure_visible(start + len - 1);
        self.ensure_visible(start);
    }

    pub fn is_visible(&self, index: usize) -> bool {
        index >= self.offset && index < self.offset + self.visible
    }

    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.visible
    }

    pub fn visible_range(&self) -> Range<usize> {
        self.offset..(self.offset + self.visible).min(self.total)
    }

    fn page_step(&self) -> usize {
        self.visible.saturating_sub(1).max(1)
    }

    fn clamp(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(0, 1)
    }
}

/// Components whose content scrolls inside a fixed viewport.
pub trait Scrollable {
    fn scroll_state(&self) -> &ScrollState;

    fn scroll_state_mut(&mut self) -> &mut ScrollState;

    fn scroll_up(&mut self) {
        self.scroll_state_mut().scroll_up(1);
    }

    fn scroll_down(&mut self) {
        self.scroll_state_mut().scroll_down(1);
    }

    fn page_up(&mut self) {
        self.scroll_state_mut().page_up();
    }

    fn page_down(&mut self) {
        self.scroll_state_mut().page_down();
    }
}

/// Draw a one-column vertical scrollbar in `area` when content overflows.
pub fn render_scrollbar(area: Rect, buf: &mut Buffer, scroll: &ScrollState) {
    if !scroll.needs_scrollbar() || area.width == 0 || area.height == 0 {
        return;
    }

    let mut state = ScrollbarState::new(scroll.max_offset()).position(scroll.offset);
    Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .track_symbol(Some("│"))
        .track_style(Style::default().fg(SURFACE_1))
        .thumb_symbol("█")
        .thumb_style(Style::default().fg(TEXT_MUTED))
        .render(area, buf, &mut state);
}

/// Mark hidden content with arrows in the last column of `area`.
pub fn render_scroll_indicators(area: Rect, buf: &mut Buffer, scroll: &ScrollState, style: Style) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let x = area.right() - 1;

    if scroll.offset > 0 {
        if let Some(cell) = buf.cell_mut((x, area.y)) {
            cell.set_symbol("▲").set_style(style);
        }
    }

    if scroll.offset + scroll.visible < scroll.total {
        if let Some(cell) = buf.cell_mut((x, area.bottom() - 1)) {
            cell.set_symbol("▼").set_style(style);
        }
    }
}
