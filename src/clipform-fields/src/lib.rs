//! # Clipform Fields
//!
//! Field definitions for the clipform copy-form and the loader that reads
//! them from a JSON document.
//!
//! The document is a single object. Each key is a field name (also used as
//! the display label) and each value describes the field:
//!
//! ```json
//! {
//!     "Name": { "type": 1, "value": "Alice" },
//!     "Cover Letter": { "type": 2, "value": "Dear Sir" }
//! }
//! ```
//!
//! `type` 1 is a single-line input, 2 a multi-line input. Other codes are
//! kept as [`FieldKind::Unrecognized`] so the UI can still show the label.
//!
//! ```rust
//! use clipform_fields::{FieldKind, parse_str};
//!
//! let fields = parse_str(r#"{"Name": {"type": 1, "value": "Alice"}}"#, "inline").unwrap();
//! let name = fields.get("Name").unwrap();
//! assert_eq!(name.kind, FieldKind::SingleLine);
//! assert_eq!(name.default_value, "Alice");
//! ```

pub mod error;
pub mod field;
pub mod loader;

pub use error::LoadError;
pub use field::{FieldCollection, FieldKind, FieldSpec};
pub use loader::{DEFAULT_FILE_NAME, load, load_optional, parse_str};
