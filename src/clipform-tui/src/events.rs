//! Where terminal events come from.
//!
//! The event loop and the blocking dialogs read through [`EventSource`] so
//! they can be driven by a script in tests.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::VecDeque;
use std::io;
use std::time::Duration;

pub trait EventSource {
    /// Wait up to `timeout` for the next event. `Ok(None)` means the
    /// timeout elapsed.
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>>;
}

/// Reads events from the real terminal.
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        if event::poll(timeout)? {
            event::read().map(Some)
        } else {
            Ok(None)
        }
    }
}

/// Replays a fixed list of events, then fails with `UnexpectedEof`.
#[derive(Debug, Default, Clone)]
pub struct ScriptedEvents {
    events: VecDeque<Event>,
}

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn push(&mut self, event: Event) -> &mut Self {
        self.events.push_back(event);
        self
    }

    pub fn key(&mut self, code: KeyCode) -> &mut Self {
        self.push(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    pub fn ctrl(&mut self, c: char) -> &mut Self {
        self.push(Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)))
    }

    /// Type each character of `text` as a key press.
    pub fn text(&mut self, text: &str) -> &mut Self {
        for c in text.chars() {
            self.key(KeyCode::Char(c));
        }
        self
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self, _timeout: Duration) -> io::Result<Option<Event>> {
        self.events
            .pop_front()
            .map(Some)
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "event script exhausted"))
    }
}

/// Some platforms also report key releases; those are ignored.
pub fn is_press(key: &KeyEvent) -> bool {
    key.kind != KeyEventKind::Release
}
