//! Submission actions for the demo forms

mod payload;
mod simulated;
mod traits;

pub use payload::{SubmitOutcome, SubmitPayload};
pub use simulated::SimulatedLatency;
pub use traits::SubmitAction;

#[cfg(test)]
pub use traits::MockSubmitAction;
