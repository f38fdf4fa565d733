//! Error types for the remote plant service.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur while talking to the plant service.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    /// The request never got a response (connection refused, timeout, ...).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered with a non-2xx status.
    #[error("Service returned status {status} for {path}")]
    Status { status: u16, path: String },

    /// The response body was not the JSON we expected.
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// The configured base URL cannot address the plants resource.
    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),

    /// The request task panicked or was torn down before settling.
    #[error("Request aborted: {0}")]
    Aborted(String),
}

impl ServiceError {
    pub fn status(status: u16, path: impl Into<String>) -> Self {
        Self::Status {
            status,
            path: path.into(),
        }
    }
}

impl From<FrameworkError> for ServiceError {
    fn from(e: FrameworkError) -> Self {
        ServiceError::Aborted(e.to_string())
    }
}

/// Collapses the outcome of a spawned request task into a single result.
pub fn settled<T>(outcome: Result<Result<T, ServiceError>, FrameworkError>) -> Result<T, ServiceError> {
    outcome.unwrap_or_else(|e| Err(e.into()))
}
