//! Application state for one session of the form.

use std::path::PathBuf;

use clipform_tui_components::component::ComponentResult;
use clipform_tui_components::key_hints::KeyHintsBar;
use clipform_tui_components::style::{Theme, VOID};
use clipform_tui_components::toast::{ToastManager, ToastWidget};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::clipboard::ClipboardSink;
use crate::form_view::{ControlId, FormView};

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppControl {
    Continue,
    Quit,
}

/// Everything the event loop mutates.
pub struct AppContext {
    pub title: String,
    /// File the form was built from.
    pub source: PathBuf,
    pub form: FormView,
    pub toasts: ToastManager,
    clipboard: Box<dyn ClipboardSink>,
}

impl AppContext {
    pub fn new(
        title: impl Into<String>,
        source: impl Into<PathBuf>,
        form: FormView,
        clipboard: Box<dyn ClipboardSink>,
    ) -> Self {
        Self {
            title: title.into(),
            source: source.into(),
            form,
            toasts: ToastManager::new(),
            clipboard,
        }
    }

    /// Replace the clipboard with the trimmed or verbatim text of `id`.
    pub fn copy(&mut self, id: ControlId) {
        let (Some(name), Some(text)) = (self.form.field_name(id), self.form.copy_text(id)) else {
            return;
        };
        let name = name.to_string();
        match self.clipboard.set_text(&text) {
            Ok(()) => {
                tracing::info!(field = %name, chars = text.chars().count(), "copied field");
                self.toasts.success(format!("Copied {name}"));
            }
            Err(e) => {
                tracing::warn!(field = %name, error = %e, "copy failed");
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> AppControl {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c')) {
            return AppControl::Quit;
        }

        match self.form.handle_key(key) {
            ComponentResult::Done(id) => self.copy(id),
            ComponentResult::NotHandled if key.code == KeyCode::Esc => return AppControl::Quit,
            _ => {}
        }
        AppControl::Continue
    }

    pub fn handle_mouse(&mut self, event: MouseEvent) -> AppControl {
        if let ComponentResult::Done(id) = self.form.handle_mouse(event) {
            self.copy(id);
        }
        AppControl::Continue
    }

    pub fn handle_paste(&mut self, text: &str) -> AppControl {
        if !self.form.handle_paste(text) {
            tracing::debug!("paste ignored, no input focused");
        }
        AppControl::Continue
    }

    /// Expire old toasts. Returns true when a redraw is needed.
    pub fn tick(&mut self) -> bool {
        self.toasts.tick()
    }

    /// Header, form panel, key hints and toasts.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(VOID));
        if area.height < 3 || area.width < 2 {
            return;
        }

        let (end, _) = buf.set_stringn(
            area.x + 1,
            area.y,
            &self.title,
            area.width.saturating_sub(1) as usize,
            Theme::title(),
        );
        let room = area.right().saturating_sub(end + 2) as usize;
        if room > 0 {
            buf.set_stringn(
                end + 2,
                area.y,
                self.source.display().to_string(),
                room,
                Theme::dim(),
            );
        }

        let body_height = area.height - 2;
        let form_area = Rect::new(
            area.x,
            area.y + 1,
            self.form.natural_width().min(area.width),
            self.form.layout().form_height.min(body_height),
        );
        self.form.render(form_area, buf);

        let mut hints = self.form.key_hints();
        hints.push(("Esc", "Quit"));
        let footer = Rect::new(area.x, area.bottom() - 1, area.width, 1);
        KeyHintsBar::from_tuples(&hints).render(footer, buf);

        ToastWidget::new(&self.toasts).render(area, buf);
    }
}
