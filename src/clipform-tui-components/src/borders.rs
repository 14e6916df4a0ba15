//! Border styles shared by the form, dialogs and the file picker.

use crate::style::{ACCENT, BORDER, BORDER_FOCUS, TEXT_DIM};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols::border::Set as BorderSet;
use ratatui::widgets::{Block, Borders, Widget};

/// Rounded corners.
pub const ROUNDED_BORDER: BorderSet<'static> = BorderSet {
    top_left: "╭",
    top_right: "╮",
    bottom_left: "╰",
    bottom_right: "╯",
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Plain ASCII for terminals without box drawing glyphs.
pub const ASCII_BORDER: BorderSet<'static> = BorderSet {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    vertical_left: "|",
    vertical_right: "|",
    horizontal_top: "-",
    horizontal_bottom: "-",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    None,
    #[default]
    Rounded,
    Ascii,
}

impl BorderStyle {
    pub fn border_set(self) -> Option<BorderSet<'static>> {
        match self {
            BorderStyle::None => None,
            BorderStyle::Rounded => Some(ROUNDED_BORDER),
            BorderStyle::Ascii => Some(ASCII_BORDER),
        }
    }
}

/// A titled box with an optional footer title.
#[derive(Debug, Clone, Default)]
pub struct RoundedBorder<'a> {
    title: Option<&'a str>,
    footer: Option<&'a str>,
    focused: bool,
    border_style: BorderStyle,
    title_color: Option<ratatui::style::Color>,
}

impl<'a> RoundedBorder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Text shown on the bottom edge, right aligned.
    pub fn footer(mut self, footer: &'a str) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn style(mut self, style: BorderStyle) -> Self {
        self.border_style = style;
        self
    }

    /// Override the title color (dialogs tint it by severity).
    pub fn title_color(mut self, color: ratatui::style::Color) -> Self {
        self.title_color = Some(color);
        self
    }

    pub fn to_block(&self) -> Block<'a> {
        let border_color = if self.focused { BORDER_FOCUS } else { BORDER };
        let title_color = self
            .title_color
            .unwrap_or(if self.focused { ACCENT } else { TEXT_DIM });

        let mut block = Block::default().border_style(Style::default().fg(border_color));
        if let Some(set) = self.border_style.border_set() {
            block = block.borders(Borders::ALL).border_set(set);
        }
        if let Some(title) = self.title {
            block = block
                .title(format!(" {title} "))
                .title_style(Style::default().fg(title_color));
        }
        if let Some(footer) = self.footer {
            block = block.title_bottom(
                ratatui::text::Line::from(format!(" {footer} "))
                    .right_aligned()
                    .style(Style::default().fg(TEXT_DIM)),
            );
        }
        block
    }

    pub fn inner(&self, area: Rect) -> Rect {
        self.to_block().inner(area)
    }
}

impl Widget for RoundedBorder<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.to_block().render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_inner_area_shrinks_by_border() {
        let inner = RoundedBorder::new().title("Form").inner(Rect::new(0, 0, 10, 5));
        assert_eq!(inner, Rect::new(1, 1, 8, 3));
    }

    #[test]
    fn test_no_border_keeps_area() {
        let inner = RoundedBorder::new()
            .style(BorderStyle::None)
            .inner(Rect::new(0, 0, 10, 5));
        assert_eq!(inner, Rect::new(0, 0, 10, 5));
    }

    #[test]
    fn test_renders_rounded_corners_and_title() {
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);
        RoundedBorder::new().title("Hi").render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "╭");
        assert_eq!(buf[(11, 2)].symbol(), "╯");
        assert_eq!(buf[(2, 0)].symbol(), "H");
    }
}
