//! Overlay dialogs.
//!
//! [`Modal`] draws the frame; [`MessageDialog`] is a blocking notice built
//! on it that is dismissed with Enter or Esc.

use crate::borders::RoundedBorder;
use crate::component::{Component, ComponentResult};
use crate::key_hints::KeyHintsBar;
use crate::style::{ERROR, INFO, SURFACE_0, TEXT, WARNING};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Text;
use ratatui::widgets::{Clear, Paragraph, Widget, Wrap};

/// A centered, bordered overlay with an optional hint row at the bottom.
pub struct Modal<'a> {
    title: &'a str,
    title_color: Option<Color>,
    width_percent: u16,
    height: u16,
    key_hints: Vec<(&'static str, &'static str)>,
}

impl<'a> Modal<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            title_color: None,
            width_percent: 60,
            height: 10,
            key_hints: Vec::new(),
        }
    }

    pub fn width_percent(mut self, percent: u16) -> Self {
        self.width_percent = percent.clamp(20, 100);
        self
    }

    pub fn height(mut self, height: u16) -> Self {
        self.height = height;
        self
    }

    pub fn title_color(mut self, color: Color) -> Self {
        self.title_color = Some(color);
        self
    }

    pub fn key_hints(mut self, hints: Vec<(&'static str, &'static str)>) -> Self {
        self.key_hints = hints;
        self
    }

    /// The modal's rectangle centered in `area`.
    pub fn centered_area(&self, area: Rect) -> Rect {
        let width = ((u32::from(area.width) * u32::from(self.width_percent) / 100) as u16)
            .max(20)
            .min(area.width);
        let height = self.height.min(area.height);

        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;
        Rect::new(x, y, width, height)
    }

    /// Content area inside the border, excluding the hint row.
    pub fn inner(&self, area: Rect) -> Rect {
        let mut inner = self.border().inner(self.centered_area(area));
        if !self.key_hints.is_empty() {
            inner.height = inner.height.saturating_sub(1);
        }
        inner
    }

    fn border(&self) -> RoundedBorder<'a> {
        let mut border = RoundedBorder::new().title(self.title).focused(true);
        if let Some(color) = self.title_color {
            border = border.title_color(color);
        }
        border
    }
}

impl Widget for Modal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = self.centered_area(area);
        if modal_area.height < 3 || modal_area.width < 10 {
            return;
        }

        Clear.render(modal_area, buf);
        buf.set_style(modal_area, Style::default().bg(SURFACE_0));
        self.border().render(modal_area, buf);

        if !self.key_hints.is_empty() {
            let inner = self.border().inner(modal_area);
            let hints_area = Rect::new(inner.x, inner.bottom().saturating_sub(1), inner.width, 1);
            KeyHintsBar::from_tuples(&self.key_hints).render(hints_area, buf);
        }
    }
}

/// Severity of a [`MessageDialog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageLevel {
    #[default]
    Info,
    Warning,
    Error,
}

impl MessageLevel {
    pub fn color(self) -> Color {
        match self {
            MessageLevel::Info => INFO,
            MessageLevel::Warning => WARNING,
            MessageLevel::Error => ERROR,
        }
    }
}

/// A titled message that blocks until acknowledged.
#[derive(Debug, Clone)]
pub struct MessageDialog {
    pub level: MessageLevel,
    pub title: String,
    pub message: String,
}

impl MessageDialog {
    pub fn new(level: MessageLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(MessageLevel::Error, title, message)
    }

    fn modal(&self, area: Rect) -> Modal<'_> {
        let modal = Modal::new(&self.title)
            .title_color(self.level.color())
            .width_percent(60)
            .key_hints(self.key_hints());
        // Size the height to the wrapped message plus border and hint row.
        let text_width = modal.inner(area).width.max(1) as usize;
        let lines: usize = self
            .message
            .lines()
            .map(|l| l.chars().count().max(1).div_ceil(text_width))
            .sum();
        modal.height(lines as u16 + 4)
    }
}

impl Component for MessageDialog {
    type Output = ();

    fn render(&self, area: Rect, buf: &mut Buffer) {
        let modal = self.modal(area);
        let inner = modal.inner(area);
        modal.render(area, buf);

        Paragraph::new(Text::from(self.message.as_str()))
            .style(Style::default().fg(TEXT).bg(SURFACE_0))
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }

    fn handle_key(&mut self, key: KeyEvent) -> ComponentResult<Self::Output> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => ComponentResult::Done(()),
            _ => ComponentResult::Handled,
        }
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        vec![("Enter", "OK")]
    }
}
