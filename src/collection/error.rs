//! Error types for the collection controller.

use super::CollectionStatus;
use crate::framework::FrameworkError;
use crate::model::PlantId;
use crate::service::ServiceError;
use thiserror::Error;

/// Errors that can occur during collection operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CollectionError {
    /// The operation needs a loaded collection.
    #[error("Collection is not ready (status: {0})")]
    NotReady(CollectionStatus),

    /// Only a failed load can be retried.
    #[error("Collection cannot be reloaded (status: {0})")]
    NotRetryable(CollectionStatus),

    /// Fetching the list failed.
    #[error("Failed to load plants: {0}")]
    Load(ServiceError),

    /// The service refused or never answered a delete.
    #[error("Failed to delete plant {id}: {source}")]
    Delete { id: PlantId, source: ServiceError },

    /// An error occurred while communicating with the controller.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CollectionError {
    fn from(msg: String) -> Self {
        CollectionError::ActorCommunicationError(msg)
    }
}

impl From<FrameworkError> for CollectionError {
    fn from(e: FrameworkError) -> Self {
        CollectionError::ActorCommunicationError(e.to_string())
    }
}
