//! Clipboard sinks.
//!
//! Copy actions only ever write; nothing in clipform reads the clipboard.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Destination for copied text. Each call replaces the previous contents.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// A native clipboard handle that can take text.
pub trait NativeClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

impl NativeClipboard for arboard::Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

fn open_arboard() -> Result<arboard::Clipboard, ClipboardError> {
    arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))
}

/// The platform clipboard.
///
/// One handle is opened on the first copy and kept for the rest of the
/// session. On X11 and Wayland the handle serves the selection to other
/// programs for as long as it lives, so `set_text` returns right away.
pub struct SystemClipboard<C: NativeClipboard = arboard::Clipboard> {
    open: fn() -> Result<C, ClipboardError>,
    handle: Option<C>,
    opened: usize,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::with_opener(open_arboard)
    }

    /// Whether a native clipboard can be opened right now.
    pub fn is_available() -> bool {
        open_arboard().is_ok()
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: NativeClipboard> SystemClipboard<C> {
    /// Use `open` to obtain the native handle.
    pub fn with_opener(open: fn() -> Result<C, ClipboardError>) -> Self {
        Self {
            open,
            handle: None,
            opened: 0,
        }
    }

    /// How many native handles have been opened so far.
    pub fn open_count(&self) -> usize {
        self.opened
    }

    pub fn handle(&self) -> Option<&C> {
        self.handle.as_ref()
    }

    fn handle_mut(&mut self) -> Result<&mut C, ClipboardError> {
        if self.handle.is_none() {
            let handle = (self.open)()?;
            self.opened += 1;
            tracing::debug!(opened = self.opened, "clipboard handle opened");
            self.handle = Some(handle);
        }
        self.handle
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("no clipboard handle".to_string()))
    }
}

impl<C: NativeClipboard> std::fmt::Debug for SystemClipboard<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.handle.is_some())
            .field("opened", &self.opened)
            .finish()
    }
}

impl<C: NativeClipboard> ClipboardSink for SystemClipboard<C> {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let result = self.handle_mut()?.write_text(text);
        if result.is_err() {
            // A broken connection is reopened on the next copy.
            self.handle = None;
        }
        result
    }
}

/// In-process clipboard. Keeps every write so callers can inspect history.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    history: Vec<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents, `None` until the first write.
    pub fn contents(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.history.push(text.to_string());
        Ok(())
    }
}

/// Shared sink; the caller keeps a handle to read back what was copied.
impl<T: ClipboardSink> ClipboardSink for std::rc::Rc<std::cell::RefCell<T>> {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.borrow_mut().set_text(text)
    }
}
