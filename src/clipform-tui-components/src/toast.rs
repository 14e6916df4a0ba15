//! Short-lived notifications.
//!
//! Toasts stack in the bottom-right corner of the area they are rendered
//! into, newest at the bottom, and expire on [`ToastManager::tick`].
//!
//! ```rust
//! use clipform_tui_components::toast::ToastManager;
//!
//! let mut toasts = ToastManager::new();
//! toasts.success("Copied Name");
//! assert_eq!(toasts.visible().len(), 1);
//! ```

use crate::style::{ERROR, INFO, SUCCESS, SURFACE_2, TEXT, WARNING};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastLevel {
    Success,
    #[default]
    Info,
    Warning,
    Error,
}

impl ToastLevel {
    /// ASCII marker shown before the message.
    pub fn icon(self) -> &'static str {
        match self {
            ToastLevel::Success => "[+]",
            ToastLevel::Info => "[i]",
            ToastLevel::Warning => "[!]",
            ToastLevel::Error => "[x]",
        }
    }

    pub fn color(self) -> Color {
        match self {
            ToastLevel::Success => SUCCESS,
            ToastLevel::Info => INFO,
            ToastLevel::Warning => WARNING,
            ToastLevel::Error => ERROR,
        }
    }

    /// Errors linger longer than confirmations.
    pub fn default_duration(self) -> Duration {
        Duration::from_millis(match self {
            ToastLevel::Success => 2000,
            ToastLevel::Info => 3000,
            ToastLevel::Warning => 4000,
            ToastLevel::Error => 6000,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(level: ToastLevel, message: impl Into<String>) -> Self {
        Self {
            id: 0,
            level,
            message: message.into(),
            created_at: Instant::now(),
            duration: level.default_duration(),
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }
}

/// Holds the live toasts, oldest first.
#[derive(Debug)]
pub struct ToastManager {
    toasts: Vec<Toast>,
    next_id: u64,
    max_visible: usize,
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 1,
            max_visible: 3,
        }
    }

    pub fn with_max_visible(mut self, max: usize) -> Self {
        self.max_visible = max.max(1);
        self
    }

    /// Add a toast and return its id.
    pub fn push(&mut self, mut toast: Toast) -> u64 {
        toast.id = self.next_id;
        self.next_id += 1;
        let id = toast.id;
        self.toasts.push(toast);
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(Toast::new(ToastLevel::Success, message))
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.push(Toast::new(ToastLevel::Info, message))
    }

    pub fn warning(&mut self, message: impl Into<String>) -> u64 {
        self.push(Toast::new(ToastLevel::Warning, message))
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(Toast::new(ToastLevel::Error, message))
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    /// Drop expired toasts. Returns true when anything was removed.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired_at(now));
        self.toasts.len() != before
    }

    /// The newest `max_visible` toasts, oldest first.
    pub fn visible(&self) -> &[Toast] {
        let skip = self.toasts.len().saturating_sub(self.max_visible);
        &self.toasts[skip..]
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws the visible toasts of a [`ToastManager`].
pub struct ToastWidget<'a> {
    manager: &'a ToastManager,
}

impl<'a> ToastWidget<'a> {
    pub fn new(manager: &'a ToastManager) -> Self {
        Self { manager }
    }
}

impl Widget for ToastWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let toasts = self.manager.visible();
        if toasts.is_empty() || area.width < 12 || area.height == 0 {
            return;
        }

        let longest = toasts
            .iter()
            .map(|t| t.message.width() + 6)
            .max()
            .unwrap_or(0);
        let width = (longest as u16).clamp(12, area.width.saturating_sub(2).max(12));
        let width = width.min(area.width);
        let x = area.right() - width;

        for (i, toast) in toasts.iter().rev().enumerate() {
            let Some(y) = area.bottom().checked_sub(1 + i as u16) else {
                break;
            };
            if y < area.y {
                break;
            }
            let row = Rect::new(x, y, width, 1);
            buf.set_style(row, Style::default().bg(SURFACE_2));
            for cell_x in row.x..row.right() {
                if let Some(cell) = buf.cell_mut((cell_x, y)) {
                    cell.set_char(' ');
                }
            }

            let accent = Style::default().fg(toast.level.color()).bg(SURFACE_2);
            let (after_icon, _) = buf.set_stringn(x + 1, y, toast.level.icon(), 3, accent);
            let room = row.right().saturating_sub(after_icon + 2) as usize;
            buf.set_stringn(
                after_icon + 1,
                y,
                &toast.message,
                room,
                Style::default().fg(TEXT).bg(SURFACE_2),
            );
        }
    }
}
