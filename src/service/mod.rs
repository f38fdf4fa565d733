//! The remote plant service and its stand-ins.
//!
//! Controllers only see the [`PlantService`] trait, injected as a
//! [`SharedPlantService`]. Three implementations are provided:
//!
//! - [`HttpPlantService`] - the real REST endpoint
//! - [`InMemoryPlantService`] - an actor-backed store for full-system tests and demos
//! - [`MockPlantService`](mock::MockPlantService) - scripted responses for unit tests

pub mod config;
pub mod error;
pub mod http;
pub mod memory;
pub mod mock;

pub use config::*;
pub use error::*;
pub use http::HttpPlantService;
pub use memory::InMemoryPlantService;

use crate::model::{NewPlant, PlantId, PlantRecord};
use async_trait::async_trait;
use std::sync::Arc;

/// The three calls the controllers make against the plants resource.
#[async_trait]
pub trait PlantService: Send + Sync {
    /// Fetch every record.
    async fn list(&self) -> Result<Vec<PlantRecord>, ServiceError>;

    /// Create a record; the returned copy carries the server-assigned id.
    async fn create(&self, plant: NewPlant) -> Result<PlantRecord, ServiceError>;

    /// Delete a record by id.
    async fn delete(&self, id: &PlantId) -> Result<(), ServiceError>;
}

/// How controllers hold their service.
pub type SharedPlantService = Arc<dyn PlantService>;
