//! Submission transport module
//!
//! The lead form hands its snapshot to a [`SubmissionTransport`]. Only the
//! simulated transport ships; a real endpoint would implement the same trait.

mod simulated;
mod traits;

pub use simulated::SimulatedTransport;
pub use traits::{SubmissionReceipt, SubmissionTransport, TransportError};

#[cfg(test)]
pub use traits::MockSubmissionTransport;
