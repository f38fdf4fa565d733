//! # Controller Trait
//!
//! The `Controller` trait is the contract every piece of session state (the plant
//! collection, the new-plant form, the in-memory store) implements to be driven
//! by the generic [`ControllerActor`](crate::framework::ControllerActor).
//!
//! # Architecture Note
//! A controller splits its work into two kinds of messages:
//! - **Requests** arrive from clients and may spawn network calls through the
//!   [`TaskSpawner`].
//! - **Completions** are the settled outcomes of those calls, delivered back to the
//!   same controller.
//!
//! Both are handled one at a time on the controller's own task, so state is never
//! shared and never locked. Because a network call never blocks the loop, state
//! queries ("is it still loading?") are answered while requests are in flight.

use crate::framework::task::TaskSpawner;
use async_trait::async_trait;
use std::fmt::Debug;

#[async_trait]
pub trait Controller: Send + 'static {
    /// Messages sent by clients, usually carrying a reply channel.
    type Request: Send + Debug + 'static;

    /// Settled outcomes of tasks spawned by this controller.
    type Completion: Send + 'static;

    /// The runtime context (dependencies) injected into the controller.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync + 'static;

    /// Called once before the first message is processed.
    async fn on_start(&mut self, _ctx: &Self::Context, _tasks: &TaskSpawner<Self::Completion>) {}

    /// Handle a request from a client.
    async fn handle_request(
        &mut self,
        request: Self::Request,
        ctx: &Self::Context,
        tasks: &TaskSpawner<Self::Completion>,
    );

    /// Apply the outcome of a task spawned earlier.
    async fn handle_completion(&mut self, completion: Self::Completion, ctx: &Self::Context);
}
