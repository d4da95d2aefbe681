//! Trait abstraction for the submission transport to enable mocking in tests

use crate::state::LeadFormFields;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Acknowledgement returned when a lead has been accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub reference: Uuid,
    pub received_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    /// Receipt stamped with a fresh reference and the current time
    pub fn issue() -> Self {
        Self {
            reference: Uuid::new_v4(),
            received_at: Utc::now(),
        }
    }

    /// Short reference shown to the visitor
    pub fn short_reference(&self) -> String {
        self.reference
            .simple()
            .to_string()
            .chars()
            .take(8)
            .collect::<String>()
            .to_uppercase()
    }
}

/// Failures a transport can report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("submission rejected: {0}")]
    Rejected(String),
    #[error("submission timed out")]
    Timeout,
}

/// Trait for submission transports, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    /// Deliver a complete lead snapshot
    async fn submit(&self, lead: LeadFormFields) -> Result<SubmissionReceipt, TransportError>;
}
