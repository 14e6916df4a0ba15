//! Terminal setup and teardown.
//!
//! [`FormTerminal`] puts the terminal into raw mode on creation and restores
//! it when dropped. A panic hook restores it too, so a panic message is
//! printed on a usable screen.
//!
//! ```rust,ignore
//! use clipform_tui::terminal::{FormTerminal, TerminalOptions};
//!
//! let mut terminal = FormTerminal::with_options(TerminalOptions::new().mouse_capture(false))?;
//! terminal.inner_mut().draw(|frame| { /* ... */ })?;
//! // restored here
//! ```

use std::io::{self, Stdout, Write, stdout};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode,
        enable_raw_mode,
    },
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

static PANIC_HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

/// Restores whatever [`enter_features`] enabled.
#[derive(Debug)]
struct TerminalGuard {
    alternate_screen: bool,
    mouse_capture: bool,
    bracketed_paste: bool,
}

impl From<&TerminalOptions> for TerminalGuard {
    fn from(options: &TerminalOptions) -> Self {
        Self {
            alternate_screen: options.alternate_screen,
            mouse_capture: options.mouse_capture,
            bracketed_paste: options.bracketed_paste,
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal_impl(self.alternate_screen, self.mouse_capture, self.bracketed_paste);
    }
}

/// Which terminal features to enable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalOptions {
    pub alternate_screen: bool,
    pub mouse_capture: bool,
    pub bracketed_paste: bool,
    /// Window title; left untouched when `None`.
    pub title: Option<String>,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            alternate_screen: true,
            mouse_capture: true,
            bracketed_paste: true,
            title: None,
        }
    }
}

impl TerminalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alternate_screen(mut self, enabled: bool) -> Self {
        self.alternate_screen = enabled;
        self
    }

    /// Mouse capture enables click-to-copy and wheel scrolling but disables
    /// the terminal's own text selection.
    pub fn mouse_capture(mut self, enabled: bool) -> Self {
        self.mouse_capture = enabled;
        self
    }

    pub fn bracketed_paste(mut self, enabled: bool) -> Self {
        self.bracketed_paste = enabled;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// A crossterm-backed ratatui terminal that restores itself on drop.
pub struct FormTerminal {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
}

impl FormTerminal {
    pub fn new() -> Result<Self> {
        Self::with_options(TerminalOptions::default())
    }

    pub fn with_options(options: TerminalOptions) -> Result<Self> {
        install_panic_hook();
        enable_raw_mode().context("failed to enable raw mode")?;
        // Raw mode is on from here; any error below drops the guard and restores it.
        let guard = TerminalGuard::from(&options);
        enter_features(&mut stdout(), &options).context("failed to set up terminal")?;

        let terminal = Terminal::new(CrosstermBackend::new(stdout()))
            .context("failed to create terminal backend")?;
        tracing::debug!(?options, "terminal initialized");

        Ok(Self {
            terminal,
            _guard: guard,
        })
    }

    pub fn inner(&self) -> &Terminal<CrosstermBackend<Stdout>> {
        &self.terminal
    }

    pub fn inner_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Current size as `(width, height)`.
    pub fn size(&self) -> Result<(u16, u16)> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height))
    }
}

/// Switch on the features in `options`. Expects raw mode to be enabled.
fn enter_features<W: Write>(out: &mut W, options: &TerminalOptions) -> io::Result<()> {
    if options.alternate_screen {
        execute!(out, EnterAlternateScreen)?;
    }
    if options.mouse_capture {
        execute!(out, EnableMouseCapture)?;
    }
    if options.bracketed_paste {
        execute!(out, EnableBracketedPaste)?;
    }
    execute!(out, Clear(ClearType::All), cursor::Hide)?;
    if let Some(title) = &options.title {
        execute!(out, SetTitle(title))?;
    }
    Ok(())
}

/// Disable the given features. Every step is attempted even if an earlier
/// one fails; the first error is returned.
fn restore_terminal_impl(
    alternate_screen: bool,
    mouse_capture: bool,
    bracketed_paste: bool,
) -> io::Result<()> {
    let mut stdout = stdout();
    let mut results = vec![execute!(stdout, cursor::Show)];
    if bracketed_paste {
        results.push(execute!(stdout, DisableBracketedPaste));
    }
    if mouse_capture {
        results.push(execute!(stdout, DisableMouseCapture));
    }
    if alternate_screen {
        results.push(execute!(stdout, LeaveAlternateScreen));
    }
    results.push(disable_raw_mode());
    results.into_iter().collect()
}

/// Restore the terminal assuming every feature was enabled.
pub fn restore_terminal() -> io::Result<()> {
    restore_terminal_impl(true, true, true)
}

fn install_panic_hook() {
    if PANIC_HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default_enable_everything() {
        let options = TerminalOptions::default();
        assert!(options.alternate_screen);
        assert!(options.mouse_capture);
        assert!(options.bracketed_paste);
        assert!(options.title.is_none());
    }

    #[test]
    fn test_options_builder() {
        let options = TerminalOptions::new()
            .mouse_capture(false)
            .bracketed_paste(false)
            .title("Clipform");
        assert!(options.alternate_screen);
        assert!(!options.mouse_capture);
        assert!(!options.bracketed_paste);
        assert_eq!(options.title.as_deref(), Some("Clipform"));
    }

    #[test]
    fn test_guard_restores_what_options_enable() {
        let options = TerminalOptions::new().mouse_capture(false);
        let guard = TerminalGuard::from(&options);
        assert!(guard.alternate_screen);
        assert!(!guard.mouse_capture);
        assert!(guard.bracketed_paste);
        // Dropping would write restore sequences to the test's stdout.
        std::mem::forget(guard);
    }

    #[test]
    fn test_enter_features_writes_only_enabled_sequences() {
        let mut out = Vec::new();
        let options = TerminalOptions::new().bracketed_paste(false).title("Clipform");
        enter_features(&mut out, &options).unwrap();
        let written = String::from_utf8_lossy(&out);

        assert!(written.contains("\x1b[?1049h"), "alternate screen");
        assert!(written.contains("\x1b[?1000h"), "mouse capture");
        assert!(!written.contains("\x1b[?2004h"), "no bracketed paste");
        assert!(written.contains("\x1b[?25l"), "cursor hidden");
        assert!(written.contains("Clipform"));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_enter_features_reports_write_failure() {
        let err = enter_features(&mut BrokenPipe, &TerminalOptions::default()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
