//! Form screens: a session plus focus, submit lifecycle and the pending task

use super::contact::ContactValues;
use super::field::{FieldInput, FieldKey, FieldKind, FormError};
use super::lifecycle::{OutcomeApplied, PendingSubmit, SubmitAttempt, SubmitPhase};
use super::login::LoginValues;
use super::model::{FormKind, FormModel, ScreenAction};
use super::register::RegisterValues;
use super::reset::ResetValues;
use super::session::FormSession;
use crate::submit::{SubmitAction, SubmitOutcome};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc::UnboundedSender;
use uuid::Uuid;

/// Trait for common focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// What currently has keyboard focus on a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus<F> {
    Field(F),
    Action(ScreenAction),
}

/// One mounted form.
///
/// Dropping the screen drops its session and aborts any submission still in
/// flight; a completion that races the abort is rejected by session id.
#[derive(Debug)]
pub struct FormScreen<V: FormModel> {
    id: Uuid,
    session: FormSession<V>,
    phase: SubmitPhase,
    active_field_index: usize,
    revealed: BTreeSet<V::Field>,
    submit_error: Option<String>,
    pending: Option<PendingSubmit>,
}

impl<V: FormModel> FormScreen<V> {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            session: FormSession::new(V::default(), V::validator()),
            phase: SubmitPhase::Editing,
            active_field_index: 0,
            revealed: BTreeSet::new(),
            submit_error: None,
            pending: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> FormKind {
        V::KIND
    }

    pub fn session(&self) -> &FormSession<V> {
        &self.session
    }

    pub fn values(&self) -> &V {
        self.session.values()
    }

    pub fn phase(&self) -> &SubmitPhase {
        &self.phase
    }

    /// Message from the last failed submission, if any
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Actions available in the current phase
    pub fn actions(&self) -> &'static [ScreenAction] {
        V::KIND.actions(self.phase.is_success())
    }

    /// Fields are only focusable while the form is shown
    fn focusable_fields(&self) -> &'static [V::Field] {
        if self.phase.is_success() {
            &[]
        } else {
            V::Field::ALL
        }
    }

    pub fn focus(&self) -> Focus<V::Field> {
        let fields = self.focusable_fields();
        let actions = self.actions();
        if let Some(field) = fields.get(self.active_field_index) {
            Focus::Field(*field)
        } else {
            let index = (self.active_field_index - fields.len()).min(actions.len() - 1);
            Focus::Action(actions[index])
        }
    }

    pub fn focused_field(&self) -> Option<V::Field> {
        match self.focus() {
            Focus::Field(field) => Some(field),
            Focus::Action(_) => None,
        }
    }

    pub fn focused_action(&self) -> Option<ScreenAction> {
        match self.focus() {
            Focus::Action(action) => Some(action),
            Focus::Field(_) => None,
        }
    }

    /// Field that keystrokes go to, if edits are currently accepted
    fn editable_field(&self) -> Option<V::Field> {
        if self.phase.is_editing() {
            self.focused_field()
        } else {
            None
        }
    }

    pub fn is_revealed(&self, field: V::Field) -> bool {
        self.revealed.contains(&field)
    }

    /// Show or hide the focused password field. Returns false if nothing toggled.
    pub fn toggle_reveal(&mut self) -> bool {
        let Some(field) = self.focused_field() else {
            return false;
        };
        if !field.kind().is_secret() {
            return false;
        }
        if !self.revealed.remove(&field) {
            self.revealed.insert(field);
        }
        true
    }

    /// Route a change event through the form's input gate into the session
    pub fn change(&mut self, field: V::Field, input: FieldInput) -> Result<(), FormError> {
        if !self.phase.is_editing() {
            return Ok(());
        }
        if !self.values().admits(field, &input) {
            tracing::debug!(form = V::KIND.name(), field = field.name(), "change rejected");
            return Ok(());
        }
        self.session.handle_change(field, input)
    }

    /// Type a character into the focused field. Space toggles checkboxes.
    pub fn input_char(&mut self, c: char) -> Result<(), FormError> {
        let Some(field) = self.editable_field() else {
            return Ok(());
        };
        if field.kind().is_checkbox() {
            if c == ' ' {
                return self.toggle_checkbox();
            }
            return Ok(());
        }
        let mut next = self.values().value(field).as_text().to_string();
        next.push(c);
        self.change(field, FieldInput::Text(next))
    }

    pub fn backspace(&mut self) -> Result<(), FormError> {
        let Some(field) = self.editable_field() else {
            return Ok(());
        };
        if field.kind().is_checkbox() {
            return Ok(());
        }
        let mut next = self.values().value(field).as_text().to_string();
        if next.pop().is_none() {
            return Ok(());
        }
        self.change(field, FieldInput::Text(next))
    }

    pub fn toggle_checkbox(&mut self) -> Result<(), FormError> {
        let Some(field) = self.editable_field() else {
            return Ok(());
        };
        if !field.kind().is_checkbox() {
            return Ok(());
        }
        let checked = self.values().value(field).is_checked();
        self.change(field, FieldInput::Checkbox(!checked))
    }

    pub fn focused_kind(&self) -> Option<FieldKind> {
        self.focused_field().map(|field| field.kind())
    }

    /// Validate and, if clean, start `action` in the background.
    ///
    /// The outcome is delivered on `outcomes` and must be fed back through
    /// [`FormScreen::apply_outcome`].
    pub fn submit(
        &mut self,
        action: Arc<dyn SubmitAction>,
        outcomes: &UnboundedSender<SubmitOutcome>,
    ) -> SubmitAttempt {
        if !self.phase.is_editing() {
            tracing::debug!(form = V::KIND.name(), "submit ignored outside editing");
            return SubmitAttempt::Ignored;
        }
        self.submit_error = None;

        if !self.session.validate() {
            tracing::debug!(
                form = V::KIND.name(),
                fields = ?self
                    .session
                    .errors()
                    .iter()
                    .map(|(field, _)| field.name())
                    .collect::<Vec<_>>(),
                "validation failed"
            );
            self.focus_first_error();
            return SubmitAttempt::Invalid;
        }

        let payload = self.values().to_payload();
        tracing::info!(form = V::KIND.name(), session = %self.id, "submitting");
        self.phase = SubmitPhase::Submitting {
            started: Instant::now(),
        };
        self.pending = Some(PendingSubmit::spawn(
            self.id,
            action,
            payload,
            outcomes.clone(),
        ));
        SubmitAttempt::Started
    }

    /// Apply the completion of a submit task
    pub fn apply_outcome(&mut self, outcome: SubmitOutcome) -> OutcomeApplied {
        if outcome.session != self.id || !self.phase.is_submitting() {
            tracing::debug!(
                form = V::KIND.name(),
                session = %outcome.session,
                "ignoring late submit completion"
            );
            return OutcomeApplied::Stale;
        }
        self.pending = None;

        match outcome.result {
            Ok(()) => {
                let confirmation = self.values().confirmation();
                tracing::info!(form = V::KIND.name(), session = %self.id, "submission succeeded");
                tracing::debug!(message = %confirmation.message_text(), "showing confirmation");
                self.phase = SubmitPhase::Success(confirmation);
                self.active_field_index = 0;
                OutcomeApplied::Succeeded
            }
            Err(message) => {
                tracing::warn!(
                    form = V::KIND.name(),
                    session = %self.id,
                    error = %message,
                    "submission failed"
                );
                self.phase = SubmitPhase::Editing;
                self.submit_error = Some(message.clone());
                OutcomeApplied::Failed(message)
            }
        }
    }

    /// Leave the confirmation view with a fresh form. Returns false if not on it.
    pub fn retry(&mut self) -> bool {
        if !self.phase.is_success() {
            return false;
        }
        self.session.reset_form();
        self.phase = SubmitPhase::Editing;
        self.active_field_index = 0;
        self.revealed.clear();
        self.submit_error = None;
        true
    }

    fn focus_first_error(&mut self) {
        let first = V::Field::ALL
            .iter()
            .position(|field| self.session.error(*field).is_some());
        if let Some(index) = first {
            self.active_field_index = index;
        }
    }
}

impl<V: FormModel> Default for FormScreen<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: FormModel> Form for FormScreen<V> {
    fn field_count(&self) -> usize {
        self.focusable_fields().len() + self.actions().len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
}

/// The mounted form, one per tab
#[derive(Debug)]
pub enum FormState {
    Login(FormScreen<LoginValues>),
    Register(FormScreen<RegisterValues>),
    Contact(FormScreen<ContactValues>),
    PasswordReset(FormScreen<ResetValues>),
}

macro_rules! with_screen {
    ($state:expr, $screen:ident => $body:expr) => {
        match $state {
            FormState::Login($screen) => $body,
            FormState::Register($screen) => $body,
            FormState::Contact($screen) => $body,
            FormState::PasswordReset($screen) => $body,
        }
    };
}

impl Default for FormState {
    fn default() -> Self {
        Self::mount(FormKind::default())
    }
}

impl FormState {
    /// Build a fresh screen for `kind`
    pub fn mount(kind: FormKind) -> Self {
        match kind {
            FormKind::Login => Self::Login(FormScreen::new()),
            FormKind::Register => Self::Register(FormScreen::new()),
            FormKind::Contact => Self::Contact(FormScreen::new()),
            FormKind::PasswordReset => Self::PasswordReset(FormScreen::new()),
        }
    }

    pub fn kind(&self) -> FormKind {
        with_screen!(self, s => s.kind())
    }

    pub fn id(&self) -> Uuid {
        with_screen!(self, s => s.id())
    }

    pub fn phase(&self) -> &SubmitPhase {
        with_screen!(self, s => s.phase())
    }

    pub fn next_field(&mut self) {
        with_screen!(self, s => s.next_field())
    }

    pub fn prev_field(&mut self) {
        with_screen!(self, s => s.prev_field())
    }

    pub fn focused_action(&self) -> Option<ScreenAction> {
        with_screen!(self, s => s.focused_action())
    }

    pub fn focused_kind(&self) -> Option<FieldKind> {
        with_screen!(self, s => s.focused_kind())
    }

    pub fn input_char(&mut self, c: char) -> Result<(), FormError> {
        with_screen!(self, s => s.input_char(c))
    }

    pub fn backspace(&mut self) -> Result<(), FormError> {
        with_screen!(self, s => s.backspace())
    }

    pub fn toggle_checkbox(&mut self) -> Result<(), FormError> {
        with_screen!(self, s => s.toggle_checkbox())
    }

    pub fn toggle_reveal(&mut self) -> bool {
        with_screen!(self, s => s.toggle_reveal())
    }

    pub fn submit(
        &mut self,
        action: Arc<dyn SubmitAction>,
        outcomes: &UnboundedSender<SubmitOutcome>,
    ) -> SubmitAttempt {
        with_screen!(self, s => s.submit(action, outcomes))
    }

    pub fn apply_outcome(&mut self, outcome: SubmitOutcome) -> OutcomeApplied {
        with_screen!(self, s => s.apply_outcome(outcome))
    }

    pub fn retry(&mut self) -> bool {
        with_screen!(self, s => s.retry())
    }
}
