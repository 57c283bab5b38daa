//! Form domain layer
//!
//! Typed records per form, a generic session holding values and field
//! errors, the validation rules and the submit lifecycle of a mounted screen.

mod contact;
mod field;
mod form_state;
mod lifecycle;
mod login;
mod model;
mod register;
mod reset;
mod session;
mod strength;
mod validation;

pub use contact::{ContactField, ContactValues, LOW_REMAINING_THRESHOLD};
pub use field::{FieldKey, FieldKind, FieldValue};
pub use form_state::{FormScreen, FormState};
#[cfg(test)]
pub use lifecycle::SubmitPhase;
pub use lifecycle::{spinner_frame, submit_progress, OutcomeApplied, SubmitAttempt};
#[cfg(test)]
pub use login::LoginField;
pub use login::LoginValues;
pub use model::{Confirmation, FormKind, FormModel, ScreenAction, Segment};
pub use register::{RegisterField, RegisterValues};
pub use reset::ResetValues;
pub use strength::{PasswordStrength, STRENGTH_SEGMENTS};
pub use validation::MAX_MESSAGE_LEN;
