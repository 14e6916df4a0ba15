//! Field model.

use indexmap::IndexMap;

/// Kind of input a field is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// One-line text input (`type: 1`)
    SingleLine,
    /// Multi-line text area (`type: 2`)
    MultiLine,
    /// Any other code; the field is shown without an input
    Unrecognized(i64),
}

impl FieldKind {
    /// Wire code for single-line fields.
    pub const SINGLE_LINE_CODE: i64 = 1;
    /// Wire code for multi-line fields.
    pub const MULTI_LINE_CODE: i64 = 2;

    /// Decode the integer `type` of a field entry.
    pub fn from_code(code: i64) -> Self {
        match code {
            Self::SINGLE_LINE_CODE => FieldKind::SingleLine,
            Self::MULTI_LINE_CODE => FieldKind::MultiLine,
            other => FieldKind::Unrecognized(other),
        }
    }

    /// The integer code this kind was decoded from.
    pub fn code(&self) -> i64 {
        match self {
            FieldKind::SingleLine => Self::SINGLE_LINE_CODE,
            FieldKind::MultiLine => Self::MULTI_LINE_CODE,
            FieldKind::Unrecognized(code) => *code,
        }
    }

    /// Whether an input control is created for this kind.
    pub fn has_input(&self) -> bool {
        !matches!(self, FieldKind::Unrecognized(_))
    }
}

/// A single named field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Unique name, also the display label
    pub name: String,
    /// Input kind
    pub kind: FieldKind,
    /// Initial content of the input
    pub default_value: String,
}

impl FieldSpec {
    /// Create a field.
    pub fn new(name: impl Into<String>, kind: FieldKind, default_value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            default_value: default_value.into(),
        }
    }

    /// Single-line field shorthand.
    pub fn single_line(name: impl Into<String>, default_value: impl Into<String>) -> Self {
        Self::new(name, FieldKind::SingleLine, default_value)
    }

    /// Multi-line field shorthand.
    pub fn multi_line(name: impl Into<String>, default_value: impl Into<String>) -> Self {
        Self::new(name, FieldKind::MultiLine, default_value)
    }
}

/// All fields of one document, in document order.
///
/// Built once at startup and never modified; edits live in the UI controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldCollection {
    fields: IndexMap<String, FieldSpec>,
}

impl FieldCollection {
    /// Build a collection from fields in order.
    ///
    /// A later field with an already-used name replaces the earlier one but
    /// keeps the earlier position.
    pub fn from_fields(fields: impl IntoIterator<Item = FieldSpec>) -> Self {
        let mut map = IndexMap::new();
        for field in fields {
            map.insert(field.name.clone(), field);
        }
        Self { fields: map }
    }

    /// Iterate fields in document order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.values()
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.get(name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the document declared no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields that get an input control.
    pub fn recognized_count(&self) -> usize {
        self.iter().filter(|f| f.kind.has_input()).count()
    }

    /// Field names in document order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a FieldCollection {
    type Item = &'a FieldSpec;
    type IntoIter = indexmap::map::Values<'a, String, FieldSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.values()
    }
}
