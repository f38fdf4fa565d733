//! # Framework Errors
//!
//! Errors raised by the controller plumbing itself, independent of any domain.

/// Errors that can occur within the controller framework itself.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Controller closed")]
    ActorClosed,
    #[error("Controller dropped response channel")]
    ActorDropped,
    #[error("Background task failed: {0}")]
    TaskFailed(String),
}
