//! Trait abstraction for submit actions to enable mocking in tests

use super::SubmitPayload;
use anyhow::Result;
use async_trait::async_trait;

/// Whatever happens to a validated form once the user submits it
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitAction: Send + Sync {
    /// Deliver the submitted values. An error sends the form back to editing.
    async fn submit(&self, payload: SubmitPayload) -> Result<()>;
}
