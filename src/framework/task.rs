//! # Request Tasks
//!
//! Controllers never await the network inside their message loop. They hand the
//! call to a [`TaskSpawner`], which runs it on its own Tokio task and feeds the
//! outcome back to the controller as a completion message.

use crate::framework::error::FrameworkError;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn, Instrument};

/// Spawns request tasks whose outcome is delivered as a completion of type `M`.
///
/// Every spawned task settles exactly once: with the future's output, or with
/// [`FrameworkError::TaskFailed`] if it panicked or was aborted. This is what
/// lets controllers clear "in progress" state unconditionally.
pub struct TaskSpawner<M> {
    completions: mpsc::UnboundedSender<M>,
    in_flight: Arc<AtomicUsize>,
}

impl<M: Send + 'static> TaskSpawner<M> {
    pub(crate) fn new(completions: mpsc::UnboundedSender<M>) -> Self {
        Self {
            completions,
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Runs `task` in the background and maps its outcome to a completion with `settle`.
    ///
    /// `operation` names the task in logs.
    pub fn spawn<F, T, S>(&self, operation: &'static str, task: F, settle: S)
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
        S: FnOnce(Result<T, FrameworkError>) -> M + Send + 'static,
    {
        let completions = self.completions.clone();
        let in_flight = self.in_flight.clone();
        in_flight.fetch_add(1, Ordering::SeqCst);

        let handle = tokio::spawn(task.in_current_span());
        tokio::spawn(
            async move {
                let outcome = handle.await.map_err(|e| {
                    warn!(operation, error = %e, "Task did not finish");
                    FrameworkError::TaskFailed(e.to_string())
                });
                in_flight.fetch_sub(1, Ordering::SeqCst);

                // The controller may already be gone; its result is then dropped.
                if completions.send(settle(outcome)).is_err() {
                    debug!(operation, "Controller gone, dropping result");
                }
            }
            .in_current_span(),
        );
    }

    /// Number of spawned tasks that have not settled yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }
}
