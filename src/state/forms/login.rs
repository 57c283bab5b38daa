//! Sign-in form

use super::field::{
    checkbox_input, text_input, FieldErrors, FieldInput, FieldKey, FieldKind, FieldValue,
    FormError, FormValues,
};
use super::model::{Confirmation, FormKind, FormModel, Segment};
use super::session::Validator;
use super::validation::{check_email, check_password, EMAIL_INVALID};
use crate::submit::SubmitPayload;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginValues {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoginField {
    Email,
    Password,
    Remember,
}

impl FieldKey for LoginField {
    const ALL: &'static [Self] = &[Self::Email, Self::Password, Self::Remember];

    fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::Remember => "remember",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Email => "Email address",
            Self::Password => "Password",
            Self::Remember => "Remember me",
        }
    }

    fn kind(self) -> FieldKind {
        match self {
            Self::Email => FieldKind::Email,
            Self::Password => FieldKind::Secret,
            Self::Remember => FieldKind::Checkbox,
        }
    }
}

impl FormValues for LoginValues {
    type Field = LoginField;

    fn value(&self, field: LoginField) -> FieldValue<'_> {
        match field {
            LoginField::Email => FieldValue::Text(&self.email),
            LoginField::Password => FieldValue::Text(&self.password),
            LoginField::Remember => FieldValue::Checkbox(self.remember),
        }
    }

    fn apply(&mut self, field: LoginField, input: FieldInput) -> Result<(), FormError> {
        match field {
            LoginField::Email => self.email = text_input(field, input)?,
            LoginField::Password => self.password = text_input(field, input)?,
            LoginField::Remember => self.remember = checkbox_input(field, input)?,
        }
        Ok(())
    }
}

pub fn validate_login(values: &LoginValues) -> FieldErrors<LoginField> {
    let mut errors = FieldErrors::new();
    errors.insert_if(LoginField::Email, check_email(&values.email, EMAIL_INVALID));
    errors.insert_if(
        LoginField::Password,
        check_password(&values.password, "Password must be at least 6 characters."),
    );
    errors
}

impl FormModel for LoginValues {
    const KIND: FormKind = FormKind::Login;

    fn validator() -> Option<Validator<Self>> {
        Some(validate_login)
    }

    fn confirmation(&self) -> Confirmation {
        Confirmation {
            title: "Welcome back!",
            message: vec![
                Segment::plain("You've successfully logged in as "),
                Segment::strong(&self.email),
                Segment::plain("."),
            ],
            tips: &[],
        }
    }

    fn to_payload(&self) -> SubmitPayload {
        SubmitPayload::Login(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn values(email: &str, password: &str) -> LoginValues {
        LoginValues {
            email: email.to_string(),
            password: password.to_string(),
            remember: false,
        }
    }

    #[test]
    fn test_empty_form_reports_both_fields() {
        let errors = validate_login(&LoginValues::default());
        assert_eq!(errors.get(LoginField::Email), Some("Email is required."));
        assert_eq!(errors.get(LoginField::Password), Some("Password is required."));
        assert_eq!(errors.get(LoginField::Remember), None);
    }

    #[test]
    fn test_short_password() {
        let errors = validate_login(&values("u@d.com", "abc"));
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(LoginField::Password),
            Some("Password must be at least 6 characters.")
        );
    }

    #[test]
    fn test_invalid_email_uses_long_message() {
        let errors = validate_login(&values("not-an-email", "abcdef"));
        assert_eq!(
            errors.get(LoginField::Email),
            Some("Enter a valid email address.")
        );
    }

    #[test]
    fn test_valid_credentials() {
        assert!(validate_login(&values("u@d.com", "abcdef")).is_empty());
    }

    #[test]
    fn test_remember_is_checkbox() {
        let mut login = LoginValues::default();
        login
            .apply(LoginField::Remember, FieldInput::Checkbox(true))
            .unwrap();
        assert_eq!(login.value(LoginField::Remember), FieldValue::Checkbox(true));
        assert!(login
            .apply(LoginField::Email, FieldInput::Checkbox(true))
            .is_err());
    }

    #[test]
    fn test_confirmation_names_email() {
        let confirmation = values("u@d.com", "abcdef").confirmation();
        assert_eq!(confirmation.title, "Welcome back!");
        assert_eq!(
            confirmation.message_text(),
            "You've successfully logged in as u@d.com."
        );
    }

    #[test]
    fn test_field_order() {
        assert_eq!(
            LoginField::ALL,
            &[LoginField::Email, LoginField::Password, LoginField::Remember]
        );
    }
}
