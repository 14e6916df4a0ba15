//! Reading field documents from disk.

use std::fs;
use std::io;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::error::LoadError;
use crate::field::{FieldCollection, FieldKind, FieldSpec};

/// File name looked up next to the program or in the working directory.
pub const DEFAULT_FILE_NAME: &str = "data.json";

/// One entry as it appears on the wire.
#[derive(Debug, Deserialize)]
struct RawField {
    #[serde(rename = "type")]
    code: i64,
    value: String,
}

/// Load a field document.
///
/// # Errors
///
/// Returns [`LoadError::Missing`] when no regular file exists at `path`;
/// every other variant means the file is there but unusable.
pub fn load(path: impl AsRef<Path>) -> Result<FieldCollection, LoadError> {
    let path = path.as_ref();

    if !path.is_file() {
        tracing::debug!(path = %path.display(), "field document not found");
        return Err(LoadError::Missing {
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::Missing {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let fields = parse_str(&contents, path)?;
    tracing::info!(
        path = %path.display(),
        fields = fields.len(),
        "loaded field document"
    );
    Ok(fields)
}

/// Like [`load`], but a missing file is `Ok(None)` instead of an error.
pub fn load_optional(path: impl AsRef<Path>) -> Result<Option<FieldCollection>, LoadError> {
    match load(path) {
        Ok(fields) => Ok(Some(fields)),
        Err(e) if e.is_missing() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Parse a field document held in memory.
///
/// `origin` only labels errors and diagnostics.
pub fn parse_str(json: &str, origin: impl AsRef<Path>) -> Result<FieldCollection, LoadError> {
    let origin = origin.as_ref();

    let entries: IndexMap<String, Value> =
        serde_json::from_str(json).map_err(|source| LoadError::InvalidJson {
            path: origin.to_path_buf(),
            source,
        })?;

    let mut fields = Vec::with_capacity(entries.len());
    for (name, entry) in entries {
        let raw: RawField =
            serde_json::from_value(entry).map_err(|e| LoadError::MalformedField {
                path: origin.to_path_buf(),
                field: name.clone(),
                reason: e.to_string(),
            })?;

        let kind = FieldKind::from_code(raw.code);
        if let FieldKind::Unrecognized(code) = kind {
            tracing::warn!(
                field = %name,
                code,
                "unrecognized field type; the field will be shown without an input"
            );
        }

        fields.push(FieldSpec::new(name, kind, raw.value));
    }

    Ok(FieldCollection::from_fields(fields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_both_kinds() {
        let fields = parse_str(
            r#"{
                "Name": {"type": 1, "value": "Alice"},
                "Cover Letter": {"type": 2, "value": "Dear Sir"}
            }"#,
            "inline.json",
        )
        .unwrap();

        let collected: Vec<_> = fields.iter().cloned().collect();
        assert_eq!(
            collected,
            vec![
                FieldSpec::single_line("Name", "Alice"),
                FieldSpec::multi_line("Cover Letter", "Dear Sir"),
            ]
        );
    }

    #[test]
    fn test_parse_unrecognized_type_is_kept() {
        let fields = parse_str(r#"{"Odd": {"type": 3, "value": "x"}}"#, "inline.json").unwrap();
        assert_eq!(
            fields.get("Odd").unwrap().kind,
            FieldKind::Unrecognized(3)
        );
        assert_eq!(fields.recognized_count(), 0);
    }

    #[test]
    fn test_parse_empty_object() {
        let fields = parse_str("{}", "inline.json").unwrap();
        assert!(fields.is_empty());
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_str("{ not json", "broken.json").unwrap_err();
        assert!(matches!(err, LoadError::InvalidJson { .. }));
    }

    #[test]
    fn test_parse_top_level_array_is_invalid() {
        let err = parse_str(r#"[{"type": 1, "value": "a"}]"#, "array.json").unwrap_err();
        assert!(matches!(err, LoadError::InvalidJson { .. }));
    }

    #[test]
    fn test_parse_missing_value_is_malformed() {
        let err = parse_str(r#"{"Email": {"type": 1}}"#, "fields.json").unwrap_err();
        match err {
            LoadError::MalformedField { field, reason, .. } => {
                assert_eq!(field, "Email");
                assert!(reason.contains("value"), "reason was: {reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_missing_type_is_malformed() {
        let err = parse_str(r#"{"Email": {"value": "a@b.c"}}"#, "fields.json").unwrap_err();
        match err {
            LoadError::MalformedField { field, reason, .. } => {
                assert_eq!(field, "Email");
                assert!(reason.contains("type"), "reason was: {reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_wrong_value_type_is_malformed() {
        let err = parse_str(r#"{"Age": {"type": 1, "value": 42}}"#, "fields.json").unwrap_err();
        assert!(matches!(err, LoadError::MalformedField { ref field, .. } if field == "Age"));
    }

    #[test]
    fn test_parse_entry_not_object_is_malformed() {
        let err = parse_str(r#"{"Age": "42"}"#, "fields.json").unwrap_err();
        assert!(matches!(err, LoadError::MalformedField { .. }));
    }

    #[test]
    fn test_parse_ignores_extra_keys() {
        let fields = parse_str(
            r#"{"Name": {"type": 1, "value": "Alice", "hint": "first name"}}"#,
            "inline.json",
        )
        .unwrap();
        assert_eq!(fields.get("Name").unwrap().default_value, "Alice");
    }
}
