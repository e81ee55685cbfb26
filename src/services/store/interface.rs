use thiserror::Error;

use crate::models::booking::{BookingConfirmation, BookingRequest};

/// Failure surface of the external booking store. The engine never retries or
/// queues; it reports what the store said and leaves recovery to the host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The store understood the request and refused it.
    #[error("booking request rejected: {0}")]
    Rejected(String),
    /// The store could not be reached or failed internally.
    #[error("booking store unavailable: {0}")]
    Unavailable(String),
}

/// The persistence collaborator a validated trip request is handed to.
/// Implemented by the host application; this crate only consumes it.
pub trait BookingStore {
    async fn submit_booking(
        &self,
        request: &BookingRequest,
    ) -> Result<BookingConfirmation, SubmissionError>;
}
