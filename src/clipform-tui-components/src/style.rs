//! Clipform theme.
//!
//! One dark palette shared by every component. Components never hardcode
//! colors; they pull them from here.

use ratatui::style::{Color, Modifier, Style};

// ============================================================
// ACCENT
// ============================================================

/// Primary accent - focus, selection, key names
pub const ACCENT: Color = Color::Rgb(0, 255, 163); // #00FFA3

/// Darker accent for pressed/secondary states
pub const ACCENT_DIM: Color = Color::Rgb(0, 139, 87); // #008B57

// ============================================================
// BACKGROUNDS
// ============================================================

/// Deepest background
pub const VOID: Color = Color::Rgb(10, 22, 40); // #0A1628

/// Surface level 0 - panels and modals
pub const SURFACE_0: Color = Color::Rgb(13, 27, 42); // #0D1B2A

/// Surface level 1 - inputs, hint bar
pub const SURFACE_1: Color = Color::Rgb(27, 40, 56); // #1B2838

/// Surface level 2 - focused inputs
pub const SURFACE_2: Color = Color::Rgb(36, 59, 83); // #243B53

// ============================================================
// TEXT
// ============================================================

/// Primary text
pub const TEXT: Color = Color::Rgb(255, 255, 255); // #FFFFFF

/// Secondary text
pub const TEXT_DIM: Color = Color::Rgb(130, 154, 177); // #829AB1

/// Placeholders and hints
pub const TEXT_MUTED: Color = Color::Rgb(72, 101, 129); // #486581

// ============================================================
// SEMANTIC
// ============================================================

pub const SUCCESS: Color = Color::Rgb(0, 245, 212); // #00F5D4
pub const WARNING: Color = Color::Rgb(255, 200, 87); // #FFC857
pub const ERROR: Color = Color::Rgb(255, 107, 107); // #FF6B6B
pub const INFO: Color = Color::Rgb(72, 202, 228); // #48CAE4

// ============================================================
// BORDERS
// ============================================================

/// Unfocused border
pub const BORDER: Color = Color::Rgb(27, 73, 101); // #1B4965

/// Focused border
pub const BORDER_FOCUS: Color = ACCENT;

/// Ready-made styles for the common cases.
pub struct Theme;

impl Theme {
    /// Field labels.
    pub fn label() -> Style {
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
    }

    /// Label of the row that currently holds focus.
    pub fn label_focused() -> Style {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    }

    /// Secondary text.
    pub fn dim() -> Style {
        Style::default().fg(TEXT_DIM)
    }

    /// Placeholder / hint text.
    pub fn muted() -> Style {
        Style::default().fg(TEXT_MUTED)
    }

    /// Title bar.
    pub fn title() -> Style {
        Style::default()
            .fg(ACCENT)
            .bg(SURFACE_0)
            .add_modifier(Modifier::BOLD)
    }
}
