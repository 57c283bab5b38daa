//! Password reset request form

use super::field::{
    text_input, FieldErrors, FieldInput, FieldKey, FieldKind, FieldValue, FormError, FormValues,
};
use super::model::{Confirmation, FormKind, FormModel, Segment};
use super::session::Validator;
use super::validation::{check_email, EMAIL_INVALID};
use crate::submit::SubmitPayload;

const RESET_TIPS: &[&str] = &[
    "The link expires in 30 minutes.",
    "Check your spam / junk folder.",
    "Make sure to use the same browser.",
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResetValues {
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResetField {
    Email,
}

impl FieldKey for ResetField {
    const ALL: &'static [Self] = &[Self::Email];

    fn name(self) -> &'static str {
        "email"
    }

    fn label(self) -> &'static str {
        "Email address"
    }

    fn kind(self) -> FieldKind {
        FieldKind::Email
    }
}

impl FormValues for ResetValues {
    type Field = ResetField;

    fn value(&self, _field: ResetField) -> FieldValue<'_> {
        FieldValue::Text(&self.email)
    }

    fn apply(&mut self, field: ResetField, input: FieldInput) -> Result<(), FormError> {
        self.email = text_input(field, input)?;
        Ok(())
    }
}

pub fn validate_reset(values: &ResetValues) -> FieldErrors<ResetField> {
    let mut errors = FieldErrors::new();
    errors.insert_if(ResetField::Email, check_email(&values.email, EMAIL_INVALID));
    errors
}

impl FormModel for ResetValues {
    const KIND: FormKind = FormKind::PasswordReset;

    fn validator() -> Option<Validator<Self>> {
        Some(validate_reset)
    }

    fn confirmation(&self) -> Confirmation {
        Confirmation {
            title: "Check your inbox",
            message: vec![
                Segment::plain("We've sent a password reset link to "),
                Segment::strong(&self.email),
                Segment::plain(
                    ". Check your spam folder if you don't see it within a few minutes.",
                ),
            ],
            tips: RESET_TIPS,
        }
    }

    fn to_payload(&self) -> SubmitPayload {
        SubmitPayload::PasswordReset(self.clone())
    }
}
