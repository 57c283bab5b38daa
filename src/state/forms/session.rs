//! Generic form session: field values plus validation errors

use super::field::{FieldErrors, FieldInput, FormError, FormValues};
use std::fmt;

/// Pure validation over a whole form record
pub type Validator<V> = fn(&V) -> FieldErrors<<V as FormValues>::Field>;

/// Values and errors of one mounted form.
///
/// A session owns a copy of the initial record so that `reset_form` can always
/// restore it, no matter how the live values were edited in between.
#[derive(Clone)]
pub struct FormSession<V: FormValues> {
    initial: V,
    values: V,
    errors: FieldErrors<V::Field>,
    validator: Option<Validator<V>>,
}

impl<V: FormValues> fmt::Debug for FormSession<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormSession")
            .field("values", &self.values)
            .field("errors", &self.errors)
            .field("has_validator", &self.validator.is_some())
            .finish_non_exhaustive()
    }
}

impl<V: FormValues> FormSession<V> {
    pub fn new(initial: V, validator: Option<Validator<V>>) -> Self {
        Self {
            values: initial.clone(),
            initial,
            errors: FieldErrors::new(),
            validator,
        }
    }

    pub fn values(&self) -> &V {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors<V::Field> {
        &self.errors
    }

    /// Message currently shown for `field`, if any
    pub fn error(&self, field: V::Field) -> Option<&str> {
        self.errors.get(field)
    }

    /// Apply a change event to one field.
    ///
    /// Editing a field dismisses its own error without re-validating; errors
    /// on other fields are left alone.
    pub fn handle_change(&mut self, field: V::Field, input: FieldInput) -> Result<(), FormError> {
        self.values.apply(field, input)?;
        if self.errors.clear_field(field) {
            tracing::trace!(field = ?field, "cleared error on edit");
        }
        Ok(())
    }

    /// Re-run validation over the current values.
    ///
    /// The error mapping is replaced wholesale. Without a validator the form is
    /// always valid and the errors are left untouched.
    pub fn validate(&mut self) -> bool {
        let Some(validator) = self.validator else {
            return true;
        };
        self.errors = validator(&self.values);
        self.errors.is_empty()
    }

    /// Restore the initial values and drop all errors
    pub fn reset_form(&mut self) {
        self.values = self.initial.clone();
        self.errors = FieldErrors::new();
    }
}
