//! Registration form

use super::field::{
    text_input, FieldErrors, FieldInput, FieldKey, FieldKind, FieldValue, FormError, FormValues,
};
use super::model::{Confirmation, FormKind, FormModel, Segment};
use super::session::Validator;
use super::strength::PasswordStrength;
use super::validation::{
    check_confirmation, check_email, check_password, check_required_trimmed, EMAIL_INVALID_SHORT,
};
use crate::submit::SubmitPayload;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegisterValues {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

impl RegisterValues {
    /// Advisory strength of the chosen password
    pub fn strength(&self) -> Option<PasswordStrength> {
        PasswordStrength::of(&self.password)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegisterField {
    Name,
    Email,
    Password,
    Confirm,
}

impl FieldKey for RegisterField {
    const ALL: &'static [Self] = &[Self::Name, Self::Email, Self::Password, Self::Confirm];

    fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::Confirm => "confirm",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Name => "Full name",
            Self::Email => "Email address",
            Self::Password => "Password",
            Self::Confirm => "Confirm password",
        }
    }

    fn kind(self) -> FieldKind {
        match self {
            Self::Name => FieldKind::Text,
            Self::Email => FieldKind::Email,
            Self::Password | Self::Confirm => FieldKind::Secret,
        }
    }
}

impl FormValues for RegisterValues {
    type Field = RegisterField;

    fn value(&self, field: RegisterField) -> FieldValue<'_> {
        FieldValue::Text(match field {
            RegisterField::Name => &self.name,
            RegisterField::Email => &self.email,
            RegisterField::Password => &self.password,
            RegisterField::Confirm => &self.confirm,
        })
    }

    fn apply(&mut self, field: RegisterField, input: FieldInput) -> Result<(), FormError> {
        let value = text_input(field, input)?;
        match field {
            RegisterField::Name => self.name = value,
            RegisterField::Email => self.email = value,
            RegisterField::Password => self.password = value,
            RegisterField::Confirm => self.confirm = value,
        }
        Ok(())
    }
}

pub fn validate_register(values: &RegisterValues) -> FieldErrors<RegisterField> {
    let mut errors = FieldErrors::new();
    errors.insert_if(
        RegisterField::Name,
        check_required_trimmed(&values.name, "Full name is required."),
    );
    errors.insert_if(
        RegisterField::Email,
        check_email(&values.email, EMAIL_INVALID_SHORT),
    );
    errors.insert_if(
        RegisterField::Password,
        check_password(&values.password, "Minimum 6 characters."),
    );
    errors.insert_if(
        RegisterField::Confirm,
        check_confirmation(&values.password, &values.confirm),
    );
    errors
}

impl FormModel for RegisterValues {
    const KIND: FormKind = FormKind::Register;

    fn validator() -> Option<Validator<Self>> {
        Some(validate_register)
    }

    fn confirmation(&self) -> Confirmation {
        Confirmation {
            title: "Account Created!",
            message: vec![
                Segment::plain("Welcome, "),
                Segment::strong(&self.name),
                Segment::plain("! Your account has been created successfully."),
            ],
            tips: &[],
        }
    }

    fn to_payload(&self) -> SubmitPayload {
        SubmitPayload::Register(self.clone())
    }
}
