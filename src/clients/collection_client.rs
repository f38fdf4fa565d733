//! # Collection Client
//!
//! High-level API for the collection controller. Wraps a
//! `ControllerClient<CollectionRequest>` and hides the message passing.

use crate::collection::{CollectionError, CollectionRequest, CollectionSnapshot, CollectionStatus};
use crate::framework::ControllerClient;
use crate::model::{PlantId, PlantRecord};
use tracing::{debug, instrument};

/// Client for interacting with the collection controller.
#[derive(Clone)]
pub struct CollectionClient {
    inner: ControllerClient<CollectionRequest>,
}

impl CollectionClient {
    pub fn new(inner: ControllerClient<CollectionRequest>) -> Self {
        Self { inner }
    }

    /// Retries a failed load and waits for it to settle.
    ///
    /// Returns the number of records loaded. Fails with
    /// [`CollectionError::NotRetryable`] unless the last load failed.
    #[instrument(skip(self))]
    pub async fn load_all(&self) -> Result<usize, CollectionError> {
        debug!("Sending request");
        self.inner
            .request(|respond_to| CollectionRequest::LoadAll { respond_to })
            .await?
    }

    /// Mirrors a record the service has already created.
    ///
    /// Returns `false` when a record with the same id is already held.
    #[instrument(skip(self, record), fields(id = %record.id))]
    pub async fn add_local(&self, record: PlantRecord) -> Result<bool, CollectionError> {
        debug!("Sending request");
        self.inner
            .request(|respond_to| CollectionRequest::AddLocal { record, respond_to })
            .await?
    }

    /// Deletes remotely, then locally. Resolves once the service has answered.
    #[instrument(skip(self, id))]
    pub async fn delete(&self, id: impl Into<PlantId>) -> Result<(), CollectionError> {
        let id = id.into();
        debug!(%id, "Sending request");
        self.inner
            .request(|respond_to| CollectionRequest::Delete { id, respond_to })
            .await?
    }

    pub async fn set_search(&self, term: impl Into<String>) -> Result<(), CollectionError> {
        let term = term.into();
        Ok(self.inner.notify(CollectionRequest::SetSearch { term }).await?)
    }

    pub async fn dismiss_notice(&self) -> Result<(), CollectionError> {
        Ok(self.inner.notify(CollectionRequest::DismissNotice).await?)
    }

    pub async fn snapshot(&self) -> Result<CollectionSnapshot, CollectionError> {
        Ok(self
            .inner
            .request(|respond_to| CollectionRequest::Snapshot { respond_to })
            .await?)
    }

    /// Records matching the current search term.
    pub async fn visible(&self) -> Result<Vec<PlantRecord>, CollectionError> {
        Ok(self
            .inner
            .request(|respond_to| CollectionRequest::Visible { respond_to })
            .await?)
    }

    pub async fn status(&self) -> Result<CollectionStatus, CollectionError> {
        Ok(self
            .inner
            .request(|respond_to| CollectionRequest::Status { respond_to })
            .await?)
    }

    /// Waits until the collection has left `Loading` and returns its state.
    pub async fn settled(&self) -> Result<CollectionSnapshot, CollectionError> {
        Ok(self
            .inner
            .request(|respond_to| CollectionRequest::Settled { respond_to })
            .await?)
    }
}
