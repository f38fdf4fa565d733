//! # Form Client
//!
//! High-level API for the new-plant form controller.

use crate::form::{FormError, FormRequest, FormSnapshot};
use crate::framework::ControllerClient;
use crate::model::{DraftField, PlantRecord};
use tracing::{debug, instrument};

/// Client for interacting with the form controller.
#[derive(Clone)]
pub struct FormClient {
    inner: ControllerClient<FormRequest>,
}

impl FormClient {
    pub fn new(inner: ControllerClient<FormRequest>) -> Self {
        Self { inner }
    }

    /// Sets one draft field. Refused with [`FormError::Busy`] while submitting.
    pub async fn update_field(
        &self,
        field: DraftField,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let value = value.into();
        self.inner
            .request(|respond_to| FormRequest::UpdateField {
                field,
                value,
                respond_to,
            })
            .await?
    }

    /// Runs validation, setting the form error on failure.
    pub async fn validate(&self) -> Result<bool, FormError> {
        Ok(self
            .inner
            .request(|respond_to| FormRequest::Validate { respond_to })
            .await?)
    }

    /// Validates and submits the draft, resolving once the create call settles.
    #[instrument(skip(self))]
    pub async fn submit(&self) -> Result<PlantRecord, FormError> {
        debug!("Sending request");
        self.inner
            .request(|respond_to| FormRequest::Submit { respond_to })
            .await?
    }

    pub async fn snapshot(&self) -> Result<FormSnapshot, FormError> {
        Ok(self
            .inner
            .request(|respond_to| FormRequest::Snapshot { respond_to })
            .await?)
    }
}
