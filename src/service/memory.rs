//! # In-Memory Plant Service
//!
//! A [`PlantService`] whose storage is a [`PlantStore`] controller running on its
//! own task. It assigns sequential numeric ids and answers exactly like the REST
//! endpoint would, including a 404 status for unknown ids on delete.

use crate::framework::{Controller, ControllerActor, ControllerClient, Response, TaskSpawner};
use crate::model::{NewPlant, PlantId, PlantRecord};
use crate::service::{PlantService, ServiceError};
use async_trait::async_trait;
use std::convert::Infallible;
use tracing::{debug, info, warn};

#[derive(Debug)]
pub enum StoreRequest {
    List {
        respond_to: Response<Vec<PlantRecord>>,
    },
    Create {
        plant: NewPlant,
        respond_to: Response<PlantRecord>,
    },
    Delete {
        id: PlantId,
        respond_to: Response<bool>,
    },
}

/// The server-side record store.
pub struct PlantStore {
    plants: Vec<PlantRecord>,
    next_id: u64,
}

impl PlantStore {
    pub fn new() -> Self {
        Self {
            plants: Vec::new(),
            next_id: 1,
        }
    }

    fn insert(&mut self, plant: NewPlant) -> PlantRecord {
        let record = plant.into_record(PlantId::from(self.next_id));
        self.next_id += 1;
        self.plants.push(record.clone());
        record
    }
}

impl Default for PlantStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Controller for PlantStore {
    type Request = StoreRequest;
    type Completion = Infallible;
    type Context = ();

    async fn handle_request(
        &mut self,
        request: StoreRequest,
        _ctx: &(),
        _tasks: &TaskSpawner<Infallible>,
    ) {
        match request {
            StoreRequest::List { respond_to } => {
                debug!(size = self.plants.len(), "List");
                let _ = respond_to.send(self.plants.clone());
            }
            StoreRequest::Create { plant, respond_to } => {
                let record = self.insert(plant);
                info!(id = %record.id, size = self.plants.len(), "Created");
                let _ = respond_to.send(record);
            }
            StoreRequest::Delete { id, respond_to } => {
                let before = self.plants.len();
                self.plants.retain(|plant| plant.id != id);
                let found = self.plants.len() < before;
                if found {
                    info!(%id, size = self.plants.len(), "Deleted");
                } else {
                    warn!(%id, "Not found");
                }
                let _ = respond_to.send(found);
            }
        }
    }

    async fn handle_completion(&mut self, completion: Infallible, _ctx: &()) {
        match completion {}
    }
}

/// Client for the in-memory store.
#[derive(Clone)]
pub struct InMemoryPlantService {
    inner: ControllerClient<StoreRequest>,
}

impl InMemoryPlantService {
    /// Spawns an empty store and returns a service backed by it.
    ///
    /// The store shuts down once every clone of the service is dropped.
    pub fn start() -> Self {
        let (actor, inner) = ControllerActor::new(PlantStore::new(), 32);
        tokio::spawn(actor.run(()));
        Self { inner }
    }

    /// Spawns a store pre-filled with `plants`, ids assigned in order from 1.
    pub async fn seeded(plants: impl IntoIterator<Item = NewPlant>) -> Result<Self, ServiceError> {
        let service = Self::start();
        for plant in plants {
            service.create(plant).await?;
        }
        Ok(service)
    }
}

#[async_trait]
impl PlantService for InMemoryPlantService {
    async fn list(&self) -> Result<Vec<PlantRecord>, ServiceError> {
        self.inner
            .request(|respond_to| StoreRequest::List { respond_to })
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))
    }

    async fn create(&self, plant: NewPlant) -> Result<PlantRecord, ServiceError> {
        self.inner
            .request(|respond_to| StoreRequest::Create { plant, respond_to })
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))
    }

    async fn delete(&self, id: &PlantId) -> Result<(), ServiceError> {
        let path = format!("/plants/{}", id);
        let id = id.clone();
        let found = self
            .inner
            .request(|respond_to| StoreRequest::Delete { id, respond_to })
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        if found {
            Ok(())
        } else {
            Err(ServiceError::status(404, path))
        }
    }
}
