//! Error types for the form controller.

use crate::collection::CollectionStatus;
use crate::framework::FrameworkError;
use crate::model::DraftError;
use crate::service::ServiceError;
use thiserror::Error;

/// Errors that can occur during form operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormError {
    /// The draft failed validation; nothing was sent.
    #[error("Form validation failed: {0}")]
    Validation(#[from] DraftError),

    /// A submission is already in flight.
    #[error("A submission is already in progress")]
    Busy,

    /// Created plants could not be added to the collection yet.
    #[error("Plants are not loaded (status: {0})")]
    CollectionNotReady(CollectionStatus),

    /// The create call failed; the draft is kept for another attempt.
    #[error("Failed to add plant: {0}")]
    Service(ServiceError),

    /// An error occurred while communicating with the controller.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for FormError {
    fn from(msg: String) -> Self {
        FormError::ActorCommunicationError(msg)
    }
}

impl From<FrameworkError> for FormError {
    fn from(e: FrameworkError) -> Self {
        FormError::ActorCommunicationError(e.to_string())
    }
}
