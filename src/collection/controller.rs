//! [`Controller`] implementation for the plant collection.
//!
//! Owns the session's list of records and walks it through
//! `Loading -> {Ready, LoadError}`. Records only change after the service has
//! confirmed the matching remote change.

use super::{CollectionError, CollectionStatus, PlantCollection};
use crate::framework::{Controller, Response, TaskSpawner};
use crate::model::{PlantId, PlantRecord};
use crate::service::{settled, ServiceError, SharedPlantService};
use async_trait::async_trait;
use tracing::{error, info, warn};

/// Shown instead of the collection when the initial fetch fails.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to fetch plants. Please try again later.";

/// Raised as a notice when a delete is refused.
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete plant. Please try again.";

#[derive(Debug)]
pub enum CollectionRequest {
    /// Retry a failed load. The initial load starts on its own.
    LoadAll {
        respond_to: Response<Result<usize, CollectionError>>,
    },
    AddLocal {
        record: PlantRecord,
        respond_to: Response<Result<bool, CollectionError>>,
    },
    Delete {
        id: PlantId,
        respond_to: Response<Result<(), CollectionError>>,
    },
    SetSearch {
        term: String,
    },
    DismissNotice,
    Snapshot {
        respond_to: Response<CollectionSnapshot>,
    },
    Visible {
        respond_to: Response<Vec<PlantRecord>>,
    },
    Status {
        respond_to: Response<CollectionStatus>,
    },
    /// Answered once the collection is no longer loading.
    Settled {
        respond_to: Response<CollectionSnapshot>,
    },
}

#[derive(Debug)]
pub enum CollectionCompletion {
    Loaded(Result<Vec<PlantRecord>, ServiceError>),
    Deleted {
        id: PlantId,
        result: Result<(), ServiceError>,
        respond_to: Response<Result<(), CollectionError>>,
    },
}

/// Everything a view needs to render the collection.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionSnapshot {
    pub status: CollectionStatus,
    pub plants: Vec<PlantRecord>,
    /// Set only when the load failed.
    pub error: Option<String>,
    /// Non-blocking notice from the last failed delete.
    pub notice: Option<String>,
    pub search: String,
}

impl CollectionSnapshot {
    pub fn is_loading(&self) -> bool {
        self.status == CollectionStatus::Loading
    }
}

pub struct CollectionController {
    plants: PlantCollection,
    status: CollectionStatus,
    error: Option<String>,
    notice: Option<String>,
    search: String,
    load_waiters: Vec<Response<Result<usize, CollectionError>>>,
    settle_waiters: Vec<Response<CollectionSnapshot>>,
}

impl CollectionController {
    pub fn new() -> Self {
        Self {
            plants: PlantCollection::new(),
            status: CollectionStatus::Loading,
            error: None,
            notice: None,
            search: String::new(),
            load_waiters: Vec::new(),
            settle_waiters: Vec::new(),
        }
    }

    fn snapshot(&self) -> CollectionSnapshot {
        CollectionSnapshot {
            status: self.status,
            plants: self.plants.records().to_vec(),
            error: self.error.clone(),
            notice: self.notice.clone(),
            search: self.search.clone(),
        }
    }

    fn start_load(&mut self, service: &SharedPlantService, tasks: &TaskSpawner<CollectionCompletion>) {
        self.status = CollectionStatus::Loading;
        info!("Loading plants");
        let service = service.clone();
        tasks.spawn(
            "list",
            async move { service.list().await },
            |outcome| CollectionCompletion::Loaded(settled(outcome)),
        );
    }

    fn ensure_ready(&self) -> Result<(), CollectionError> {
        match self.status {
            CollectionStatus::Ready => Ok(()),
            status => Err(CollectionError::NotReady(status)),
        }
    }

    fn apply_load(&mut self, result: Result<Vec<PlantRecord>, ServiceError>) {
        let reply = match result {
            Ok(records) => {
                let size = self.plants.replace_all(records);
                self.error = None;
                self.status = CollectionStatus::Ready;
                info!(size, "Loaded");
                Ok(size)
            }
            Err(e) => {
                // The records held before the attempt stay as they were.
                self.error = Some(LOAD_FAILED_MESSAGE.to_string());
                self.status = CollectionStatus::LoadError;
                error!(error = %e, "Error fetching plants");
                Err(CollectionError::Load(e))
            }
        };

        for waiter in self.load_waiters.drain(..) {
            let _ = waiter.send(reply.clone());
        }
        let snapshot = self.snapshot();
        for waiter in self.settle_waiters.drain(..) {
            let _ = waiter.send(snapshot.clone());
        }
    }
}

impl Default for CollectionController {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Controller for CollectionController {
    type Request = CollectionRequest;
    type Completion = CollectionCompletion;
    type Context = SharedPlantService;

    async fn on_start(&mut self, service: &SharedPlantService, tasks: &TaskSpawner<CollectionCompletion>) {
        self.start_load(service, tasks);
    }

    async fn handle_request(
        &mut self,
        request: CollectionRequest,
        service: &SharedPlantService,
        tasks: &TaskSpawner<CollectionCompletion>,
    ) {
        match request {
            CollectionRequest::LoadAll { respond_to } => {
                if self.status != CollectionStatus::LoadError {
                    let _ = respond_to.send(Err(CollectionError::NotRetryable(self.status)));
                    return;
                }
                self.load_waiters.push(respond_to);
                self.start_load(service, tasks);
            }
            CollectionRequest::AddLocal { record, respond_to } => {
                let result = self.ensure_ready().map(|()| {
                    let id = record.id.clone();
                    let added = self.plants.insert(record);
                    if added {
                        info!(%id, size = self.plants.len(), "Added");
                    } else {
                        warn!(%id, "Duplicate id, keeping existing record");
                    }
                    added
                });
                let _ = respond_to.send(result);
            }
            CollectionRequest::Delete { id, respond_to } => {
                if let Err(e) = self.ensure_ready() {
                    let _ = respond_to.send(Err(e));
                    return;
                }
                let service = service.clone();
                let target = id.clone();
                tasks.spawn(
                    "delete",
                    async move { service.delete(&target).await },
                    move |outcome| CollectionCompletion::Deleted {
                        id,
                        result: settled(outcome),
                        respond_to,
                    },
                );
            }
            CollectionRequest::SetSearch { term } => {
                self.search = term;
            }
            CollectionRequest::DismissNotice => {
                self.notice = None;
            }
            CollectionRequest::Snapshot { respond_to } => {
                let _ = respond_to.send(self.snapshot());
            }
            CollectionRequest::Visible { respond_to } => {
                let _ = respond_to.send(self.plants.matching(&self.search));
            }
            CollectionRequest::Status { respond_to } => {
                let _ = respond_to.send(self.status);
            }
            CollectionRequest::Settled { respond_to } => {
                if self.status == CollectionStatus::Loading {
                    self.settle_waiters.push(respond_to);
                } else {
                    let _ = respond_to.send(self.snapshot());
                }
            }
        }
    }

    async fn handle_completion(&mut self, completion: CollectionCompletion, _service: &SharedPlantService) {
        match completion {
            CollectionCompletion::Loaded(result) => self.apply_load(result),
            CollectionCompletion::Deleted {
                id,
                result,
                respond_to,
            } => {
                let reply = match result {
                    Ok(()) => {
                        self.plants.remove(&id);
                        self.notice = None;
                        info!(%id, size = self.plants.len(), "Deleted");
                        Ok(())
                    }
                    Err(e) => {
                        self.notice = Some(DELETE_FAILED_MESSAGE.to_string());
                        error!(%id, error = %e, "Error deleting plant");
                        Err(CollectionError::Delete { id, source: e })
                    }
                };
                let _ = respond_to.send(reply);
            }
        }
    }
}
