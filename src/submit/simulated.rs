//! Default submit action: wait a moment, then succeed

use super::{SubmitAction, SubmitPayload};
use crate::state::FormKind;
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Stands in for a network round trip with a fixed delay per form
#[derive(Debug, Clone, Default)]
pub struct SimulatedLatency {
    delay_override: Option<Duration>,
}

impl SimulatedLatency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the same delay for every form
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay_override: Some(delay),
        }
    }

    pub fn delay_for(&self, kind: FormKind) -> Duration {
        self.delay_override
            .unwrap_or_else(|| kind.simulated_delay())
    }
}

#[async_trait]
impl SubmitAction for SimulatedLatency {
    async fn submit(&self, payload: SubmitPayload) -> Result<()> {
        let delay = self.delay_for(payload.kind());
        tracing::debug!(form = payload.kind().name(), ?delay, "simulating submission");
        tokio::time::sleep(delay).await;
        Ok(())
    }
}
