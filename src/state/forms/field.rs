//! Form field value objects

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Errors raised by misuse of a form record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A change event carried the wrong kind of input for its field
    #[error("field `{field}` expects {expected} input")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },
}

/// Raw input delivered by a change event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    /// Full replacement text for a text-like field
    Text(String),
    /// Toggle state for a checkbox
    Checkbox(bool),
}

/// How a field is edited and drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Secret,
    Multiline,
    Checkbox,
}

impl FieldKind {
    pub fn is_checkbox(self) -> bool {
        self == FieldKind::Checkbox
    }

    pub fn is_multiline(self) -> bool {
        self == FieldKind::Multiline
    }

    pub fn is_secret(self) -> bool {
        self == FieldKind::Secret
    }
}

/// Borrowed view of a field's current value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Checkbox(bool),
}

impl<'a> FieldValue<'a> {
    /// Get the text value (returns empty string for checkboxes)
    pub fn as_text(&self) -> &'a str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Checkbox(_) => "",
        }
    }

    /// Get the checkbox state (returns false for text fields)
    pub fn is_checked(&self) -> bool {
        match self {
            FieldValue::Checkbox(checked) => *checked,
            FieldValue::Text(_) => false,
        }
    }
}

/// Key naming one field of a typed form record.
///
/// `ALL` lists the fields in display order.
pub trait FieldKey: Copy + Eq + Ord + fmt::Debug + Send + Sync + 'static {
    const ALL: &'static [Self];

    /// Stable machine name of the field
    fn name(self) -> &'static str;

    /// Label shown next to the input
    fn label(self) -> &'static str;

    fn kind(self) -> FieldKind;
}

/// A typed record holding every field value of one form
pub trait FormValues: Clone + fmt::Debug + PartialEq + Send + 'static {
    type Field: FieldKey;

    fn value(&self, field: Self::Field) -> FieldValue<'_>;

    /// Store `input` into `field`, rejecting input of the wrong shape
    fn apply(&mut self, field: Self::Field, input: FieldInput) -> Result<(), FormError>;
}

/// Unwrap text input for a text-like field
pub fn text_input<F: FieldKey>(field: F, input: FieldInput) -> Result<String, FormError> {
    match input {
        FieldInput::Text(value) => Ok(value),
        FieldInput::Checkbox(_) => Err(FormError::TypeMismatch {
            field: field.name(),
            expected: "text",
        }),
    }
}

/// Unwrap checkbox input for a checkbox field
pub fn checkbox_input<F: FieldKey>(field: F, input: FieldInput) -> Result<bool, FormError> {
    match input {
        FieldInput::Checkbox(checked) => Ok(checked),
        FieldInput::Text(_) => Err(FormError::TypeMismatch {
            field: field.name(),
            expected: "checkbox",
        }),
    }
}

/// Validation messages keyed by field.
///
/// A field without an entry has no error; empty messages are never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors<F: FieldKey> {
    entries: BTreeMap<F, String>,
}

impl<F: FieldKey> Default for FieldErrors<F> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<F: FieldKey> FieldErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field, replacing any previous one
    pub fn insert(&mut self, field: F, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            self.entries.remove(&field);
        } else {
            self.entries.insert(field, message);
        }
    }

    /// Record `message` only when a check produced one
    pub fn insert_if(&mut self, field: F, message: Option<&str>) {
        if let Some(message) = message {
            self.insert(field, message);
        }
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    /// Drop the message for one field. Returns true if one was present.
    pub fn clear_field(&mut self, field: F) -> bool {
        self.entries.remove(&field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> {
        self.entries.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl<F: FieldKey, S: Into<String>> FromIterator<(F, S)> for FieldErrors<F> {
    fn from_iter<I: IntoIterator<Item = (F, S)>>(iter: I) -> Self {
        let mut errors = Self::new();
        for (field, message) in iter {
            errors.insert(field, message);
        }
        errors
    }
}
