//! # Clipform TUI
//!
//! Terminal front end for clipform. Builds a form from a field document and
//! copies field values to the system clipboard.
//!
//! ```text
//! SourceResolver ──> resolve() ──> FieldCollection ──> FormView ──> event_loop::run
//!                       │                                 │
//!                   Prompter                        ClipboardSink
//!             (MessageDialog, FilePicker)
//! ```

pub mod app;
pub mod clipboard;
pub mod event_loop;
pub mod events;
pub mod form_view;
pub mod prompter;
pub mod source;
pub mod terminal;
pub mod zones;

pub use app::{AppContext, AppControl};
pub use clipboard::{ClipboardError, ClipboardSink, MemoryClipboard, NativeClipboard, SystemClipboard};
pub use events::{CrosstermEvents, EventSource, ScriptedEvents};
pub use form_view::{ControlId, FocusTarget, FormLayout, FormView, InputControl};
pub use prompter::TerminalPrompter;
pub use source::{
    ExeDirResolver, ExplicitPathResolver, Prompter, ResolveError, Resolved, SourceResolver,
    SourceStrategy, WorkingDirResolver, build_resolver, resolve,
};
pub use terminal::{FormTerminal, TerminalOptions, restore_terminal};
