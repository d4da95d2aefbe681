//! Lead form controller: field snapshot, submission lifecycle and view selection
//!
//! The controller owns the current [`LeadFormFields`] snapshot and the
//! [`SubmissionStatus`]. A validated submit flips the status to
//! `Submitting` immediately and runs the transport on a spawned task; the
//! result comes back over a channel and is applied by [`poll_outcome`],
//! which the event loop calls every tick.
//!
//! At most one submission is in flight per controller.
//!
//! [`poll_outcome`]: LeadFormController::poll_outcome

use super::field::{FieldId, LeadFormFields};
use super::validation::{validate, ValidationErrors};
use crate::transport::{SubmissionReceipt, SubmissionTransport, TransportError};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Reason shown when the transport rejects a lead
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Reason shown when the transport does not answer in time
pub const TIMEOUT_FAILURE: &str = "timeout";

/// Where the form is in its submission lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    /// Terminal: the form is replaced by the confirmation view
    Succeeded(SubmissionReceipt),
    Failed(String),
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// What a call to [`LeadFormController::submit`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Validation passed and the transport call is running
    Started { attempt: u32 },
    /// Validation failed; status was left alone
    Rejected(ValidationErrors),
    /// A submission is already in flight or the lead was already accepted
    Ignored,
}

/// Which view the render surface should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadFormView<'a> {
    Form {
        editable: bool,
        busy: bool,
        failure: Option<&'a str>,
    },
    Confirmation {
        receipt: &'a SubmissionReceipt,
    },
}

/// Pure mapping from submission status to view
pub fn select_view(status: &SubmissionStatus) -> LeadFormView<'_> {
    match status {
        SubmissionStatus::Succeeded(receipt) => LeadFormView::Confirmation { receipt },
        SubmissionStatus::Submitting => LeadFormView::Form {
            editable: false,
            busy: true,
            failure: None,
        },
        SubmissionStatus::Idle => LeadFormView::Form {
            editable: true,
            busy: false,
            failure: None,
        },
        SubmissionStatus::Failed(reason) => LeadFormView::Form {
            editable: true,
            busy: false,
            failure: Some(reason),
        },
    }
}

#[derive(Debug)]
struct SubmissionOutcome {
    attempt: u32,
    result: Result<SubmissionReceipt, TransportError>,
}

/// Owns one mounted lead form
pub struct LeadFormController {
    fields: LeadFormFields,
    status: SubmissionStatus,
    validation: Option<ValidationErrors>,
    transport: Arc<dyn SubmissionTransport>,
    timeout: Option<Duration>,
    attempts: u32,
    outcome_tx: mpsc::UnboundedSender<SubmissionOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SubmissionOutcome>,
}

impl LeadFormController {
    pub fn new(transport: Arc<dyn SubmissionTransport>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            fields: LeadFormFields::default(),
            status: SubmissionStatus::Idle,
            validation: None,
            transport,
            timeout: None,
            attempts: 0,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Fail a submission that takes longer than `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn fields(&self) -> &LeadFormFields {
        &self.fields
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Field errors from the last rejected submit, if still relevant
    pub fn validation(&self) -> Option<&ValidationErrors> {
        self.validation.as_ref()
    }

    pub fn view(&self) -> LeadFormView<'_> {
        select_view(&self.status)
    }

    /// Replace one field's value with a new snapshot.
    ///
    /// Returns false once the lead has been accepted; the form is gone by then.
    pub fn update_field(&mut self, field: FieldId, value: impl Into<String>) -> bool {
        if self.status.is_succeeded() {
            tracing::debug!(?field, "Ignoring edit on submitted form");
            return false;
        }

        self.fields = self.fields.with_field(field, value);

        if let Some(errors) = self.validation.as_mut() {
            if errors.clear_field(field) {
                self.validation = None;
            }
        }
        true
    }

    /// Validate the current snapshot and start a submission
    pub fn submit(&mut self) -> SubmitAttempt {
        if self.status.is_submitting() || self.status.is_succeeded() {
            tracing::debug!(status = ?self.status, "Ignoring submit");
            return SubmitAttempt::Ignored;
        }

        if let Err(errors) = validate(&self.fields) {
            tracing::warn!(fields = errors.errors().len(), "Lead failed validation");
            self.validation = Some(errors.clone());
            return SubmitAttempt::Rejected(errors);
        }

        self.validation = None;
        self.attempts += 1;
        let attempt = self.attempts;
        self.status = SubmissionStatus::Submitting;
        tracing::info!(attempt, "Submitting lead");

        let transport = Arc::clone(&self.transport);
        let payload = self.fields.clone();
        let timeout = self.timeout;
        let tx = self.outcome_tx.clone();

        tokio::spawn(async move {
            let call = transport.submit(payload);
            let result = match timeout {
                Some(limit) => tokio::time::timeout(limit, call)
                    .await
                    .unwrap_or(Err(TransportError::Timeout)),
                None => call.await,
            };
            // The controller may have been dropped with the form
            let _ = tx.send(SubmissionOutcome { attempt, result });
        });

        SubmitAttempt::Started { attempt }
    }

    /// Apply a finished submission if one is waiting. Never blocks.
    pub fn poll_outcome(&mut self) -> bool {
        match self.outcome_rx.try_recv() {
            Ok(outcome) => {
                self.apply_outcome(outcome);
                true
            }
            Err(_) => false,
        }
    }

    /// Wait for the in-flight submission, if any, and apply its result
    #[cfg(test)]
    pub async fn wait_for_outcome(&mut self) {
        if !self.status.is_submitting() {
            return;
        }
        if let Some(outcome) = self.outcome_rx.recv().await {
            self.apply_outcome(outcome);
        }
    }

    fn apply_outcome(&mut self, outcome: SubmissionOutcome) {
        if !self.status.is_submitting() || outcome.attempt != self.attempts {
            tracing::debug!(attempt = outcome.attempt, "Dropping stale submission outcome");
            return;
        }

        self.status = match outcome.result {
            Ok(receipt) => {
                tracing::info!(
                    attempt = outcome.attempt,
                    reference = %receipt.reference,
                    "Lead accepted"
                );
                SubmissionStatus::Succeeded(receipt)
            }
            Err(TransportError::Timeout) => {
                tracing::warn!(attempt = outcome.attempt, "Lead submission timed out");
                SubmissionStatus::Failed(TIMEOUT_FAILURE.to_string())
            }
            Err(err) => {
                tracing::warn!(attempt = outcome.attempt, error = %err, "Lead submission failed");
                SubmissionStatus::Failed(GENERIC_FAILURE.to_string())
            }
        };
    }
}
