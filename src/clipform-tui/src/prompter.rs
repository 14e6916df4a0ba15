//! Blocking dialogs drawn on the form's terminal before the form exists.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clipform_tui_components::prelude::*;
use clipform_tui_components::style::{TEXT_DIM, VOID};
use crossterm::event::Event;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::events::{EventSource, is_press};
use crate::source::{PICKER_TITLE, Prompter};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// [`Prompter`] that runs each dialog to completion on a ratatui terminal.
pub struct TerminalPrompter<'a, B: Backend, E: EventSource> {
    terminal: &'a mut Terminal<B>,
    events: &'a mut E,
    title: String,
}

impl<'a, B: Backend, E: EventSource> TerminalPrompter<'a, B, E> {
    pub fn new(terminal: &'a mut Terminal<B>, events: &'a mut E, title: impl Into<String>) -> Self {
        Self {
            terminal,
            events,
            title: title.into(),
        }
    }

    /// Draw `component` over an empty screen until it completes.
    /// Returns `None` when it was cancelled.
    fn run_modal<C: Component>(&mut self, component: &mut C) -> io::Result<Option<C::Output>> {
        loop {
            let title = self.title.as_str();
            self.terminal
                .draw(|frame| {
                    let area = frame.area();
                    let buf = frame.buffer_mut();
                    render_backdrop(title, area, buf);
                    component.render(area, buf);
                })
                .map_err(|e| io::Error::other(e.to_string()))?;

            let Some(event) = self.events.next_event(POLL_INTERVAL)? else {
                continue;
            };
            match event {
                Event::Key(key) if is_press(&key) => match component.handle_key(key) {
                    ComponentResult::Done(value) => return Ok(Some(value)),
                    ComponentResult::Cancelled => return Ok(None),
                    ComponentResult::Handled | ComponentResult::NotHandled => {}
                },
                Event::Resize(..) => {
                    self.terminal
                        .autoresize()
                        .map_err(|e| io::Error::other(e.to_string()))?;
                }
                _ => {}
            }
        }
    }
}

impl<B: Backend, E: EventSource> Prompter for TerminalPrompter<'_, B, E> {
    fn notify(&mut self, level: MessageLevel, title: &str, message: &str) -> io::Result<()> {
        let mut dialog = MessageDialog::new(level, title, message);
        self.run_modal(&mut dialog)?;
        Ok(())
    }

    fn pick_json_file(&mut self, start_dir: &Path) -> io::Result<Option<PathBuf>> {
        let mut picker = FilePicker::new(PICKER_TITLE, start_dir, "json");
        let picked = self.run_modal(&mut picker)?;
        tracing::debug!(?picked, "file picker closed");
        Ok(picked)
    }
}

fn render_backdrop(title: &str, area: Rect, buf: &mut Buffer) {
    buf.set_style(area, Style::default().bg(VOID));
    if area.height > 0 {
        buf.set_stringn(
            area.x + 1,
            area.y,
            title,
            area.width.saturating_sub(2) as usize,
            Style::default().fg(TEXT_DIM).bg(VOID),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::ScriptedEvents;
    use crossterm::event::KeyCode;
    use ratatui::backend::TestBackend;

    fn terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(80, 24)).unwrap()
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_notify_waits_for_acknowledgement() {
        let mut terminal = terminal();
        let mut events = ScriptedEvents::default();
        events.key(KeyCode::Char('x')).key(KeyCode::Enter);

        let mut prompter = TerminalPrompter::new(&mut terminal, &mut events, "Clipform");
        prompter
            .notify(MessageLevel::Warning, "File Not Found", "Please select a JSON file.")
            .unwrap();

        assert_eq!(events.remaining(), 0);
        let screen = screen_text(&terminal);
        assert!(screen.contains("File Not Found"));
        assert!(screen.contains("Please select a JSON file."));
    }

    #[test]
    fn test_pick_json_file_returns_selection() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("data.json"), "{}").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "").unwrap();

        let mut terminal = terminal();
        let mut events = ScriptedEvents::default();
        // Row 0 is "..", row 1 the only JSON file.
        events.key(KeyCode::Down).key(KeyCode::Enter);

        let mut prompter = TerminalPrompter::new(&mut terminal, &mut events, "Clipform");
        let picked = prompter.pick_json_file(dir.path()).unwrap();

        assert_eq!(picked, Some(dir.path().join("data.json")));
        assert!(screen_text(&terminal).contains(PICKER_TITLE));
    }

    #[test]
    fn test_pick_json_file_cancel() {
        let dir = tempfile::tempdir().unwrap();
        let mut terminal = terminal();
        let mut events = ScriptedEvents::default();
        events.key(KeyCode::Esc);

        let mut prompter = TerminalPrompter::new(&mut terminal, &mut events, "Clipform");
        assert_eq!(prompter.pick_json_file(dir.path()).unwrap(), None);
    }

    #[test]
    fn test_exhausted_events_surface_as_error() {
        let mut terminal = terminal();
        let mut events = ScriptedEvents::default();
        let mut prompter = TerminalPrompter::new(&mut terminal, &mut events, "Clipform");
        let err = prompter
            .notify(MessageLevel::Info, "Hello", "world")
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
