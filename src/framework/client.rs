//! # Generic Client
//!
//! The sending half of a controller: wraps the request channel and does the
//! oneshot round trip once so domain clients don't have to.

use crate::framework::error::FrameworkError;
use tokio::sync::{mpsc, oneshot};

/// Type alias for the one-shot reply channel carried inside a request.
pub type Response<T> = oneshot::Sender<T>;

/// A cheap, cloneable handle for sending requests of type `R` to a controller.
pub struct ControllerClient<R> {
    sender: mpsc::Sender<R>,
}

impl<R> Clone for ControllerClient<R> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<R: Send> ControllerClient<R> {
    pub fn new(sender: mpsc::Sender<R>) -> Self {
        Self { sender }
    }

    /// Sends the request built by `build` and waits for the controller's reply.
    ///
    /// `build` receives the reply channel and must embed it in the request.
    pub async fn request<T>(&self, build: impl FnOnce(Response<T>) -> R) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    /// Sends a request that carries no reply channel.
    pub async fn notify(&self, request: R) -> Result<(), FrameworkError> {
        self.sender
            .send(request)
            .await
            .map_err(|_| FrameworkError::ActorClosed)
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
