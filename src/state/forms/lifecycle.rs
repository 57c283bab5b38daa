//! Submission lifecycle: editing, submitting, success

use super::model::Confirmation;
use crate::submit::{SubmitAction, SubmitOutcome, SubmitPayload};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use uuid::Uuid;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAME_MS: u128 = 80;

/// Where a form is in its submit cycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Submitting {
        started: Instant,
    },
    Success(Confirmation),
}

impl SubmitPhase {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        match self {
            Self::Success(confirmation) => Some(confirmation),
            _ => None,
        }
    }

    /// Time spent submitting so far
    pub fn elapsed(&self) -> Option<Duration> {
        match self {
            Self::Submitting { started } => Some(started.elapsed()),
            _ => None,
        }
    }
}

/// Result of asking a screen to submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Not editing (already submitting or showing the confirmation)
    Ignored,
    /// Validation failed; errors are on the session
    Invalid,
    Started,
}

/// What applying a submit outcome did to a screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeApplied {
    /// Outcome belongs to another session or arrived after the fact
    Stale,
    Succeeded,
    Failed(String),
}

/// An in-flight submit task. Dropping it aborts the task.
#[derive(Debug)]
pub struct PendingSubmit {
    handle: JoinHandle<()>,
}

impl PendingSubmit {
    /// Run `action` in the background and report back on `outcomes`
    pub fn spawn(
        session: Uuid,
        action: Arc<dyn SubmitAction>,
        payload: SubmitPayload,
        outcomes: UnboundedSender<SubmitOutcome>,
    ) -> Self {
        let handle = tokio::spawn(async move {
            let result = action
                .submit(payload)
                .await
                .map_err(|err| format!("{err:#}"));
            if outcomes.send(SubmitOutcome { session, result }).is_err() {
                tracing::debug!(%session, "submit finished after the app shut down");
            }
        });
        Self { handle }
    }
}

impl Drop for PendingSubmit {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Eased progress of a submission towards its expected duration, 0.0 to 1.0
pub fn submit_progress(elapsed: Duration, expected: Duration) -> f32 {
    if expected.is_zero() {
        return 1.0;
    }
    let t = (elapsed.as_secs_f32() / expected.as_secs_f32()).clamp(0.0, 1.0);
    simple_easing::cubic_out(t)
}

pub fn spinner_frame(elapsed: Duration) -> &'static str {
    let index = (elapsed.as_millis() / SPINNER_FRAME_MS) as usize % SPINNER_FRAMES.len();
    SPINNER_FRAMES[index]
}
