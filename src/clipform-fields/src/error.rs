//! Errors produced while loading a field document.

use std::io;
use std::path::PathBuf;

/// Why a field document could not be turned into a [`FieldCollection`].
///
/// [`FieldCollection`]: crate::FieldCollection
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Nothing usable exists at the path.
    #[error("no JSON file found at {}", path.display())]
    Missing { path: PathBuf },

    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not JSON, or its top level is not an object.
    #[error("{} is not a valid field document: {source}", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// One entry is missing `type`/`value` or has them with the wrong JSON type.
    #[error("field \"{field}\" in {} is malformed: {reason}", path.display())]
    MalformedField {
        path: PathBuf,
        field: String,
        reason: String,
    },
}

impl LoadError {
    /// Returns true when the file simply isn't there.
    ///
    /// This is the only kind a caller is expected to recover from silently.
    pub fn is_missing(&self) -> bool {
        matches!(self, LoadError::Missing { .. })
    }

    /// The path the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Missing { path }
            | LoadError::Unreadable { path, .. }
            | LoadError::InvalidJson { path, .. }
            | LoadError::MalformedField { path, .. } => path,
        }
    }
}
