//! The main loop: draw, wait for an event, dispatch it.

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::Event;
use ratatui::Terminal;
use ratatui::backend::Backend;

use crate::app::{AppContext, AppControl};
use crate::events::{EventSource, is_press};

/// How long to wait for input before expiring toasts.
pub const TICK_RATE: Duration = Duration::from_millis(250);

/// Run until the user quits.
pub fn run<B: Backend, E: EventSource>(
    terminal: &mut Terminal<B>,
    events: &mut E,
    ctx: &mut AppContext,
) -> Result<()> {
    tracing::info!(
        source = %ctx.source.display(),
        fields = ctx.form.rows().len(),
        inputs = ctx.form.input_row_count(),
        "form ready"
    );

    let mut dirty = true;
    loop {
        if dirty {
            terminal
                .draw(|frame| {
                    let area = frame.area();
                    ctx.render(area, frame.buffer_mut());
                })
                .map_err(|e| anyhow::anyhow!("failed to draw: {e}"))?;
        }

        let event = events
            .next_event(TICK_RATE)
            .context("failed to read terminal event")?;

        let control = match event {
            None => {
                dirty = ctx.tick();
                continue;
            }
            Some(Event::Key(key)) if is_press(&key) => ctx.handle_key(key),
            Some(Event::Mouse(mouse)) => ctx.handle_mouse(mouse),
            Some(Event::Paste(text)) => ctx.handle_paste(&text),
            Some(Event::Resize(width, height)) => {
                tracing::debug!(width, height, "terminal resized");
                terminal
                    .autoresize()
                    .map_err(|e| anyhow::anyhow!("failed to resize: {e}"))?;
                AppControl::Continue
            }
            Some(_) => {
                dirty = false;
                continue;
            }
        };

        if control == AppControl::Quit {
            tracing::info!("quit requested");
            return Ok(());
        }
        dirty = true;
    }
}
