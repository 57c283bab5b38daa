//! Per-form behavior layered on top of the generic session

use super::field::{FieldInput, FormValues};
use super::session::Validator;
use crate::submit::SubmitPayload;
use std::time::Duration;

/// The four forms of the kit, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormKind {
    #[default]
    Login,
    Register,
    Contact,
    PasswordReset,
}

impl FormKind {
    pub const ALL: [FormKind; 4] = [
        FormKind::Login,
        FormKind::Register,
        FormKind::Contact,
        FormKind::PasswordReset,
    ];

    /// Stable name, used in the config file and logs
    pub fn name(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
            Self::Contact => "contact",
            Self::PasswordReset => "forgot",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn tab_label(self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Register => "Register",
            Self::Contact => "Contact",
            Self::PasswordReset => "Forgot Password",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Login => 0,
            Self::Register => 1,
            Self::Contact => 2,
            Self::PasswordReset => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Register => "Create account",
            Self::Contact => "Get in touch",
            Self::PasswordReset => "Forgot password?",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Login => "Welcome back. Enter your credentials to continue.",
            Self::Register => "Join us today. It's free and takes less than a minute.",
            Self::Contact => {
                "We'd love to hear from you. Fill out the form and we'll respond shortly."
            }
            Self::PasswordReset => {
                "No worries! Enter your email and we'll send you a secure reset link."
            }
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Register => "Create account",
            Self::Contact => "Send message",
            Self::PasswordReset => "Send reset link",
        }
    }

    /// Submit button text while the action is in flight
    pub fn busy_label(self) -> &'static str {
        match self {
            Self::Login => "Signing in…",
            Self::Register => "Creating account…",
            Self::Contact => "Sending…",
            Self::PasswordReset => "Sending link…",
        }
    }

    /// Fake latency used when no real submit action is wired
    pub fn simulated_delay(self) -> Duration {
        match self {
            Self::Contact => Duration::from_millis(1500),
            Self::Login | Self::Register | Self::PasswordReset => Duration::from_millis(1400),
        }
    }

    /// Focusable actions below the fields
    pub fn actions(self, succeeded: bool) -> &'static [ScreenAction] {
        match (self, succeeded) {
            (Self::Login, false) => &[ScreenAction::Submit, ScreenAction::ForgotPassword],
            (Self::Register, false) => &[ScreenAction::Submit, ScreenAction::SignIn],
            (Self::Contact, false) => &[ScreenAction::Submit],
            (Self::PasswordReset, false) => &[ScreenAction::Submit, ScreenAction::BackToSignIn],
            (Self::PasswordReset, true) => &[ScreenAction::Retry, ScreenAction::BackToLogin],
            (_, true) => &[ScreenAction::Retry],
        }
    }

    /// Label of the "start over" action on the confirmation view
    pub fn retry_label(self) -> &'static str {
        match self {
            Self::Login => "Log in again",
            Self::Register => "Register another",
            Self::Contact => "Send another",
            Self::PasswordReset => "Try another email",
        }
    }
}

/// Something the user can activate on a form screen besides editing a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    Submit,
    ForgotPassword,
    SignIn,
    BackToSignIn,
    BackToLogin,
    Retry,
}

impl ScreenAction {
    /// Form to switch to when activated, if this is a navigation link
    pub fn target(self) -> Option<FormKind> {
        match self {
            Self::ForgotPassword => Some(FormKind::PasswordReset),
            Self::SignIn | Self::BackToSignIn | Self::BackToLogin => Some(FormKind::Login),
            Self::Submit | Self::Retry => None,
        }
    }

    pub fn is_button(self) -> bool {
        matches!(self, Self::Submit | Self::Retry | Self::BackToLogin)
    }

    pub fn label(self, kind: FormKind) -> &'static str {
        match self {
            Self::Submit => kind.submit_label(),
            Self::Retry => kind.retry_label(),
            Self::ForgotPassword => "Forgot password?",
            Self::SignIn => "Already have an account? Sign in",
            Self::BackToSignIn => "Back to sign in",
            Self::BackToLogin => "Back to login",
        }
    }
}

/// Piece of a confirmation message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Strong(String),
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Segment::Plain(text.into())
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Segment::Strong(text.into())
    }

    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(s) | Segment::Strong(s) => s,
        }
    }
}

/// What the success view shows after a submission went through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub title: &'static str,
    pub message: Vec<Segment>,
    pub tips: &'static [&'static str],
}

impl Confirmation {
    /// Message flattened to plain text
    pub fn message_text(&self) -> String {
        self.message.iter().map(Segment::text).collect()
    }
}

/// A concrete form: its record, rules and what a submission carries
pub trait FormModel: FormValues + Default {
    const KIND: FormKind;

    fn validator() -> Option<Validator<Self>>;

    /// Confirmation built from the submitted values
    fn confirmation(&self) -> Confirmation;

    fn to_payload(&self) -> SubmitPayload;

    /// Input gate applied before a change reaches the session.
    ///
    /// Returning false drops the change silently.
    fn admits(&self, _field: Self::Field, _input: &FieldInput) -> bool {
        true
    }
}
