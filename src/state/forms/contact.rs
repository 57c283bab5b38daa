//! Contact form

use super::field::{
    text_input, FieldErrors, FieldInput, FieldKey, FieldKind, FieldValue, FormError, FormValues,
};
use super::model::{Confirmation, FormKind, FormModel, Segment};
use super::session::Validator;
use super::validation::{
    check_email, check_message, check_required_trimmed, fits_message_limit, EMAIL_INVALID_SHORT,
    MAX_MESSAGE_LEN,
};
use crate::submit::SubmitPayload;

/// Remaining-characters count below which the counter is highlighted
pub const LOW_REMAINING_THRESHOLD: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactValues {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactValues {
    /// Characters still available in the message box
    pub fn remaining(&self) -> usize {
        MAX_MESSAGE_LEN.saturating_sub(self.message.chars().count())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldKey for ContactField {
    const ALL: &'static [Self] = &[Self::Name, Self::Email, Self::Subject, Self::Message];

    fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Name => "Your name",
            Self::Email => "Email address",
            Self::Subject => "Subject (optional)",
            Self::Message => "Message",
        }
    }

    fn kind(self) -> FieldKind {
        match self {
            Self::Name | Self::Subject => FieldKind::Text,
            Self::Email => FieldKind::Email,
            Self::Message => FieldKind::Multiline,
        }
    }
}

impl FormValues for ContactValues {
    type Field = ContactField;

    fn value(&self, field: ContactField) -> FieldValue<'_> {
        FieldValue::Text(match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        })
    }

    fn apply(&mut self, field: ContactField, input: FieldInput) -> Result<(), FormError> {
        let value = text_input(field, input)?;
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
        Ok(())
    }
}

pub fn validate_contact(values: &ContactValues) -> FieldErrors<ContactField> {
    let mut errors = FieldErrors::new();
    errors.insert_if(
        ContactField::Name,
        check_required_trimmed(&values.name, "Your name is required."),
    );
    errors.insert_if(
        ContactField::Email,
        check_email(&values.email, EMAIL_INVALID_SHORT),
    );
    errors.insert_if(ContactField::Message, check_message(&values.message));
    errors
}

impl FormModel for ContactValues {
    const KIND: FormKind = FormKind::Contact;

    fn validator() -> Option<Validator<Self>> {
        Some(validate_contact)
    }

    fn confirmation(&self) -> Confirmation {
        Confirmation {
            title: "Message Sent!",
            message: vec![
                Segment::plain("Thank you, "),
                Segment::strong(&self.name),
                Segment::plain("! We'll get back to you at "),
                Segment::strong(&self.email),
                Segment::plain(" as soon as possible."),
            ],
            tips: &[],
        }
    }

    fn to_payload(&self) -> SubmitPayload {
        SubmitPayload::Contact(self.clone())
    }

    // The message box is capped on input, not by the validator
    fn admits(&self, field: ContactField, input: &FieldInput) -> bool {
        match (field, input) {
            (ContactField::Message, FieldInput::Text(raw)) => fits_message_limit(raw),
            _ => true,
        }
    }
}
