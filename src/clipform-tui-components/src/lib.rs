#![allow(clippy::too_many_arguments)]
//! # Clipform TUI Components
//!
//! The widgets clipform is assembled from. Each one wraps ratatui primitives
//! with the clipform theme so the application code only deals with state.
//!
//! ## Component Categories
//!
//! ### Input Components
//! - [`TextInput`](input::TextInput) - Single-line text input with cursor
//! - [`TextArea`](text_area::TextArea) - Fixed-height multi-line text input
//! - [`CopyButton`](button::CopyButton) - Focusable push button
//!
//! ### Containers & Feedback
//! - [`Modal`](modal::Modal) - Overlay dialog container
//! - [`MessageDialog`](modal::MessageDialog) - Blocking notice with a level
//! - [`ToastManager`](toast::ToastManager) - Short-lived notifications
//! - [`KeyHintsBar`](key_hints::KeyHintsBar) - Keyboard shortcut footer
//!
//! ### Selection
//! - [`FilePicker`](file_picker::FilePicker) - Directory browser limited to one extension
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      clipform-tui (form view, dialogs)              │
//! └─────────────────────────────────┬───────────────────────────────────┘
//!                                   │
//! ┌─────────────────────────────────▼───────────────────────────────────┐
//! │                    clipform-tui-components                          │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────┐  ┌───────────┐  │
//! │  │  TextInput  │  │  TextArea   │  │   Modal     │  │ FilePicker│  │
//! │  └──────┬──────┘  └──────┬──────┘  └──────┬──────┘  └─────┬─────┘  │
//! │  ┌──────▼────────────────▼────────────────▼────────────────▼─────┐ │
//! │  │                    Component Trait                            │ │
//! │  │  render() | handle_key() | key_hints() | set_focus()         │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────┬───────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────▼───────────────────────────────────────┐
//! │                         ratatui                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

pub mod borders;
pub mod button;
pub mod component;
pub mod file_picker;
pub mod focus;
pub mod input;
pub mod key_hints;
pub mod modal;
pub mod scroll;
pub mod style;
pub mod text_area;
pub mod toast;

/// Commonly used types and traits for quick imports.
///
/// ```rust,ignore
/// use clipform_tui_components::prelude::*;
/// ```
pub mod prelude {
    pub use crate::borders::{BorderStyle, RoundedBorder};
    pub use crate::button::CopyButton;
    pub use crate::component::{Component, ComponentResult};
    pub use crate::file_picker::{FilePicker, FilePickerState, PickerEntry};
    pub use crate::focus::{FocusDirection, FocusManager};
    pub use crate::input::{InputState, LineInput, TextInput};
    pub use crate::key_hints::{KeyHint, KeyHintsBar};
    pub use crate::modal::{MessageDialog, MessageLevel, Modal};
    pub use crate::scroll::{ScrollState, Scrollable, render_scrollbar};
    pub use crate::text_area::{MultiLineInput, TextArea, TextAreaState};
    pub use crate::toast::{Toast, ToastLevel, ToastManager, ToastWidget};
}

/// Clipform TUI Components version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
