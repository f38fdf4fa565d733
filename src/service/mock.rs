//! # Mock Plant Service
//!
//! [`MockPlantService`] answers [`PlantService`] calls from a queue of scripted
//! expectations. It lets controller tests inject failures (500s, dropped
//! connections) and hold a response back to observe "in progress" state, without
//! running any server.
//!
//! ```rust
//! use plant_catalog::model::PlantRecord;
//! use plant_catalog::service::mock::MockPlantService;
//! use plant_catalog::service::{PlantService, ServiceError};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockPlantService::new();
//!     mock.expect_list()
//!         .return_ok(vec![PlantRecord::new(1u64, "Fern", "fern.png", 9.99)]);
//!     mock.expect_delete(1u64)
//!         .return_err(ServiceError::status(500, "/plants/1"));
//!
//!     let service = mock.service();
//!     assert_eq!(service.list().await.unwrap().len(), 1);
//!     assert!(service.delete(&1u64.into()).await.is_err());
//!
//!     mock.verify(); // Ensures all expectations were met
//! }
//! ```

use crate::model::{NewPlant, PlantId, PlantRecord};
use crate::service::{PlantService, ServiceError, SharedPlantService};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum Expected {
    List(Result<Vec<PlantRecord>, ServiceError>),
    Create(Result<PlantRecord, ServiceError>),
    Delete {
        id: PlantId,
        response: Result<(), ServiceError>,
    },
}

struct Expectation {
    expected: Expected,
    gate: Option<oneshot::Receiver<()>>,
}

/// A call the mock has received, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    List,
    Create(NewPlant),
    Delete(PlantId),
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    calls: Vec<RecordedCall>,
}

/// A scripted [`PlantService`] with expectation tracking.
///
/// Clones share the same script, so the test can keep one handle while the
/// controllers use another.
#[derive(Clone, Default)]
pub struct MockPlantService {
    state: Arc<Mutex<MockState>>,
}

impl MockPlantService {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mock as the shared service handle controllers take.
    pub fn service(&self) -> SharedPlantService {
        Arc::new(self.clone())
    }

    /// Expects a `list` call.
    pub fn expect_list(&mut self) -> ExpectationBuilder<Vec<PlantRecord>> {
        ExpectationBuilder::new(self.state.clone(), Expected::List)
    }

    /// Expects a `create` call.
    pub fn expect_create(&mut self) -> ExpectationBuilder<PlantRecord> {
        ExpectationBuilder::new(self.state.clone(), Expected::Create)
    }

    /// Expects a `delete` call for `id`.
    pub fn expect_delete(&mut self, id: impl Into<PlantId>) -> ExpectationBuilder<()> {
        let id = id.into();
        ExpectationBuilder::new(self.state.clone(), move |response| Expected::Delete {
            id,
            response,
        })
    }

    /// Every call received so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }

    /// Records `call` and takes the next expectation off the queue.
    fn next(&self, call: RecordedCall) -> Expectation {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call.clone());
        match state.expectations.pop_front() {
            Some(expectation) => expectation,
            None => panic!("Unexpected request: {:?}", call),
        }
    }
}

/// Builder for a single expectation returning `T`.
pub struct ExpectationBuilder<T> {
    state: Arc<Mutex<MockState>>,
    build: Box<dyn FnOnce(Result<T, ServiceError>) -> Expected + Send>,
    gate: Option<oneshot::Receiver<()>>,
}

impl<T> ExpectationBuilder<T> {
    fn new(
        state: Arc<Mutex<MockState>>,
        build: impl FnOnce(Result<T, ServiceError>) -> Expected + Send + 'static,
    ) -> Self {
        Self {
            state,
            build: Box::new(build),
            gate: None,
        }
    }

    /// Holds the response back until `gate` fires (or its sender is dropped).
    pub fn held_until(mut self, gate: oneshot::Receiver<()>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ServiceError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, ServiceError>) {
        let expectation = Expectation {
            expected: (self.build)(response),
            gate: self.gate,
        };
        self.state.lock().unwrap().expectations.push_back(expectation);
    }
}

async fn wait_for(gate: Option<oneshot::Receiver<()>>) {
    if let Some(gate) = gate {
        let _ = gate.await;
    }
}

#[async_trait]
impl PlantService for MockPlantService {
    async fn list(&self) -> Result<Vec<PlantRecord>, ServiceError> {
        let Expectation { expected, gate } = self.next(RecordedCall::List);
        wait_for(gate).await;
        match expected {
            Expected::List(response) => response,
            _ => panic!("Unexpected request or expectation mismatch: list"),
        }
    }

    async fn create(&self, plant: NewPlant) -> Result<PlantRecord, ServiceError> {
        let Expectation { expected, gate } = self.next(RecordedCall::Create(plant));
        wait_for(gate).await;
        match expected {
            Expected::Create(response) => response,
            _ => panic!("Unexpected request or expectation mismatch: create"),
        }
    }

    async fn delete(&self, id: &PlantId) -> Result<(), ServiceError> {
        let Expectation { expected, gate } = self.next(RecordedCall::Delete(id.clone()));
        wait_for(gate).await;
        match expected {
            Expected::Delete {
                id: expected_id,
                response,
            } => {
                assert_eq!(&expected_id, id, "delete called with unexpected id");
                response
            }
            _ => panic!("Unexpected request or expectation mismatch: delete"),
        }
    }
}
