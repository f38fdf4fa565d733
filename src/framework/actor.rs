//! # Generic Controller Actor
//!
//! `ControllerActor` is the "server" half of a controller. It owns the controller
//! state and both receivers (client requests and task completions) and processes
//! them sequentially on a single Tokio task.

use crate::framework::client::ControllerClient;
use crate::framework::controller::Controller;
use crate::framework::task::TaskSpawner;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// The generic actor that drives a [`Controller`].
///
/// **Concurrency Model**:
/// Requests and completions are handled one at a time, so the controller's state
/// needs no `Mutex`. Completions are polled first, which means a settled network
/// call is applied before the next client request is looked at.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ControllerActor::new(controller, buffer)` returns the actor and its client.
/// 2.  **Wire & Run**: spawn `actor.run(context)` with the controller's dependencies.
/// 3.  **Shutdown**: drop every client; the loop exits once the request channel closes.
///     Tasks still in flight finish on their own and their results are discarded.
pub struct ControllerActor<C: Controller> {
    controller: C,
    receiver: mpsc::Receiver<C::Request>,
}

impl<C: Controller> ControllerActor<C> {
    /// Creates a new `ControllerActor` and the client used to reach it.
    ///
    /// # Arguments
    ///
    /// * `controller` - Initial controller state
    /// * `buffer_size` - Capacity of the request channel; senders wait when it is full
    pub fn new(controller: C, buffer_size: usize) -> (Self, ControllerClient<C::Request>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            controller,
            receiver,
        };
        (actor, ControllerClient::new(sender))
    }

    /// Runs the controller's event loop until every client has been dropped.
    ///
    /// # Context Injection
    /// `context` is handed to every hook, so dependencies (service clients, other
    /// controllers) can be created after the actor and wired in here.
    pub async fn run(mut self, context: C::Context) {
        // Just the type name (e.g. "CollectionController")
        let controller_type = std::any::type_name::<C>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(controller_type, "Controller started");

        let (completion_sender, mut completions) = mpsc::unbounded_channel();
        let tasks = TaskSpawner::new(completion_sender);

        self.controller.on_start(&context, &tasks).await;

        loop {
            tokio::select! {
                biased;
                Some(completion) = completions.recv() => {
                    self.controller.handle_completion(completion, &context).await;
                }
                request = self.receiver.recv() => match request {
                    Some(request) => {
                        debug!(controller_type, ?request, "Request");
                        self.controller.handle_request(request, &context, &tasks).await;
                    }
                    None => break,
                },
            }
        }

        info!(controller_type, in_flight = tasks.in_flight(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::Response;
    use async_trait::async_trait;
    use tokio::sync::oneshot;

    // --- A counter whose increments are applied by a background task ---

    #[derive(Default)]
    struct Counter {
        value: u32,
        pending: u32,
    }

    #[derive(Debug)]
    enum CounterRequest {
        Increment { gate: oneshot::Receiver<()> },
        Read { respond_to: Response<(u32, u32)> },
    }

    #[async_trait]
    impl Controller for Counter {
        type Request = CounterRequest;
        type Completion = ();
        type Context = u32;

        async fn handle_request(
            &mut self,
            request: CounterRequest,
            _ctx: &u32,
            tasks: &TaskSpawner<()>,
        ) {
            match request {
                CounterRequest::Increment { gate } => {
                    self.pending += 1;
                    tasks.spawn("increment", async move { gate.await }, |_| ());
                }
                CounterRequest::Read { respond_to } => {
                    let _ = respond_to.send((self.value, self.pending));
                }
            }
        }

        async fn handle_completion(&mut self, _completion: (), step: &u32) {
            self.pending -= 1;
            self.value += step;
        }
    }

    #[tokio::test]
    async fn test_requests_are_answered_while_tasks_are_in_flight() {
        let (actor, client) = ControllerActor::new(Counter::default(), 8);
        let handle = tokio::spawn(actor.run(5));

        let (release, gate) = oneshot::channel();
        client
            .notify(CounterRequest::Increment { gate })
            .await
            .unwrap();

        // The increment is parked on its gate, yet the controller still answers.
        let read = client
            .request(|respond_to| CounterRequest::Read { respond_to })
            .await
            .unwrap();
        assert_eq!(read, (0, 1));

        release.send(()).unwrap();
        let mut read = (0, 1);
        for _ in 0..100 {
            read = client
                .request(|respond_to| CounterRequest::Read { respond_to })
                .await
                .unwrap();
            if read.1 == 0 {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert_eq!(read, (5, 0));

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_closed_controller_reports_actor_closed() {
        let (actor, client) = ControllerActor::new(Counter::default(), 8);
        drop(actor);

        let result = client
            .request(|respond_to| CounterRequest::Read { respond_to })
            .await;
        assert_eq!(result, Err(crate::framework::FrameworkError::ActorClosed));
    }
}
