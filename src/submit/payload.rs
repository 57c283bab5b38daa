//! Values handed to a submit action and the result sent back

use crate::state::{ContactValues, FormKind, LoginValues, RegisterValues, ResetValues};
use std::fmt;
use uuid::Uuid;

/// A validated form, ready to be submitted
#[derive(Clone, PartialEq, Eq)]
pub enum SubmitPayload {
    Login(LoginValues),
    Register(RegisterValues),
    Contact(ContactValues),
    PasswordReset(ResetValues),
}

impl SubmitPayload {
    pub fn kind(&self) -> FormKind {
        match self {
            Self::Login(_) => FormKind::Login,
            Self::Register(_) => FormKind::Register,
            Self::Contact(_) => FormKind::Contact,
            Self::PasswordReset(_) => FormKind::PasswordReset,
        }
    }
}

// Passwords stay out of logs
impl fmt::Debug for SubmitPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login(v) => f
                .debug_struct("Login")
                .field("email", &v.email)
                .field("remember", &v.remember)
                .finish_non_exhaustive(),
            Self::Register(v) => f
                .debug_struct("Register")
                .field("name", &v.name)
                .field("email", &v.email)
                .finish_non_exhaustive(),
            Self::Contact(v) => f.debug_tuple("Contact").field(v).finish(),
            Self::PasswordReset(v) => f.debug_tuple("PasswordReset").field(v).finish(),
        }
    }
}

/// Completion of a submit task, addressed to the session that started it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub session: Uuid,
    pub result: Result<(), String>,
}
