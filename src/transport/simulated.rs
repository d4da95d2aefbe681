//! Stand-in transport that waits and then accepts (or rejects) the lead
//!
//! There is no lead backend yet. This transport sleeps for a fixed delay to
//! mimic a network round-trip and logs the payload it would have sent.

use super::traits::{SubmissionReceipt, SubmissionTransport, TransportError};
use crate::state::LeadFormFields;
use async_trait::async_trait;
use std::time::Duration;

/// Default simulated round-trip
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// Transport that resolves after a fixed delay
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
    reject_with: Option<String>,
}

impl SimulatedTransport {
    /// Transport that always accepts after `delay`
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            reject_with: None,
        }
    }

    /// Transport that always rejects after `delay`
    pub fn failing(delay: Duration, reason: impl Into<String>) -> Self {
        Self {
            delay,
            reject_with: Some(reason.into()),
        }
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[async_trait]
impl SubmissionTransport for SimulatedTransport {
    async fn submit(&self, lead: LeadFormFields) -> Result<SubmissionReceipt, TransportError> {
        tokio::time::sleep(self.delay).await;

        if let Some(reason) = &self.reject_with {
            tracing::warn!(reason = %reason, "Simulated transport rejected lead");
            return Err(TransportError::Rejected(reason.clone()));
        }

        let payload = serde_json::to_string(&lead)
            .map_err(|e| TransportError::Rejected(format!("payload not serializable: {e}")))?;
        let receipt = SubmissionReceipt::issue();
        tracing::info!(
            reference = %receipt.reference,
            payload = %payload,
            "Form submitted"
        );
        Ok(receipt)
    }
}
