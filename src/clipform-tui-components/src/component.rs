//! The [`Component`] trait.
//!
//! Form inputs and the blocking dialogs share it: the owner renders the
//! component, feeds it keys and acts on the [`ComponentResult`].

use crossterm::event::KeyEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// Outcome of one key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentResult<T = ()> {
    /// Consumed; nothing else to do.
    Handled,
    /// Not for this component. The owner may use the key.
    NotHandled,
    /// Finished with a value (a chosen file, a submitted line).
    Done(T),
    /// Dismissed with Esc or Ctrl+C.
    Cancelled,
}

impl<T> ComponentResult<T> {
    /// True once the component has nothing more to ask.
    pub fn is_done(&self) -> bool {
        matches!(self, ComponentResult::Done(_) | ComponentResult::Cancelled)
    }

    /// Convert the value carried by `Done`.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ComponentResult<U> {
        match self {
            ComponentResult::Handled => ComponentResult::Handled,
            ComponentResult::NotHandled => ComponentResult::NotHandled,
            ComponentResult::Done(v) => ComponentResult::Done(f(v)),
            ComponentResult::Cancelled => ComponentResult::Cancelled,
        }
    }
}

pub trait Component {
    /// Value produced by [`ComponentResult::Done`].
    type Output;

    fn render(&self, area: Rect, buf: &mut Buffer);

    fn handle_key(&mut self, key: KeyEvent) -> ComponentResult<Self::Output>;

    /// `(key, description)` pairs for the footer.
    fn key_hints(&self) -> Vec<(&'static str, &'static str)>;

    /// Dialogs are always focused and ignore this.
    fn set_focus(&mut self, _focused: bool) {}

    /// Insert pasted text. Returns false if the component takes no text.
    fn handle_paste(&mut self, _text: &str) -> bool {
        false
    }

    /// Preferred `(width, height)` in cells.
    fn natural_size(&self) -> (u16, u16) {
        (0, 0)
    }
}
