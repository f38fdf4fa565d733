//! [`Controller`] implementation for the new-plant form.

use super::FormError;
use crate::clients::CollectionClient;
use crate::collection::CollectionStatus;
use crate::framework::{Controller, Response, TaskSpawner};
use crate::model::{DraftError, DraftField, NewPlant, PlantDraft, PlantRecord};
use crate::service::{settled, ServiceError, SharedPlantService};
use async_trait::async_trait;
use tracing::{error, info, warn};

/// Shown after a failed create; the draft is left untouched.
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to add plant. Please try again.";

/// The form talks to the service and hands created records to the collection.
pub type FormContext = (SharedPlantService, CollectionClient);

#[derive(Debug)]
pub enum FormRequest {
    UpdateField {
        field: DraftField,
        value: String,
        respond_to: Response<Result<(), FormError>>,
    },
    Validate {
        respond_to: Response<bool>,
    },
    Submit {
        respond_to: Response<Result<PlantRecord, FormError>>,
    },
    Snapshot {
        respond_to: Response<FormSnapshot>,
    },
}

#[derive(Debug)]
pub enum FormCompletion {
    Submitted {
        result: Result<PlantRecord, ServiceError>,
        respond_to: Response<Result<PlantRecord, FormError>>,
    },
}

/// What a view needs to render the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSnapshot {
    pub draft: PlantDraft,
    /// Inputs and the submit button are disabled while this is set.
    pub submitting: bool,
    pub error: Option<String>,
}

#[derive(Default)]
pub struct FormController {
    draft: PlantDraft,
    submitting: bool,
    error: Option<String>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            draft: self.draft.clone(),
            submitting: self.submitting,
            error: self.error.clone(),
        }
    }

    /// Checks the draft, recording the first problem as the form error.
    fn validate(&mut self) -> Result<NewPlant, DraftError> {
        NewPlant::try_from(&self.draft).inspect_err(|e| {
            self.error = Some(e.to_string());
        })
    }

    fn reset(&mut self) {
        self.draft.clear();
        self.error = None;
    }
}

#[async_trait]
impl Controller for FormController {
    type Request = FormRequest;
    type Completion = FormCompletion;
    type Context = FormContext;

    async fn handle_request(
        &mut self,
        request: FormRequest,
        ctx: &FormContext,
        tasks: &TaskSpawner<FormCompletion>,
    ) {
        let (service, collection) = ctx;
        match request {
            FormRequest::UpdateField {
                field,
                value,
                respond_to,
            } => {
                let result = if self.submitting {
                    Err(FormError::Busy)
                } else {
                    self.draft.set(field, value);
                    Ok(())
                };
                let _ = respond_to.send(result);
            }
            FormRequest::Validate { respond_to } => {
                let _ = respond_to.send(self.validate().is_ok());
            }
            FormRequest::Submit { respond_to } => {
                if self.submitting {
                    let _ = respond_to.send(Err(FormError::Busy));
                    return;
                }
                let plant = match self.validate() {
                    Ok(plant) => plant,
                    Err(e) => {
                        warn!(error = %e, "Submission rejected");
                        let _ = respond_to.send(Err(e.into()));
                        return;
                    }
                };

                // Only a loaded collection accepts the created record, and it
                // never leaves Ready once there.
                match collection.status().await {
                    Ok(CollectionStatus::Ready) => {}
                    Ok(status) => {
                        warn!(%status, "Submission refused, plants not loaded");
                        let _ = respond_to.send(Err(FormError::CollectionNotReady(status)));
                        return;
                    }
                    Err(e) => {
                        let _ = respond_to.send(Err(FormError::ActorCommunicationError(e.to_string())));
                        return;
                    }
                }

                self.submitting = true;
                self.error = None;
                info!(name = %plant.name, "Submitting plant");

                let service = service.clone();
                tasks.spawn(
                    "create",
                    async move { service.create(plant).await },
                    move |outcome| FormCompletion::Submitted {
                        result: settled(outcome),
                        respond_to,
                    },
                );
            }
            FormRequest::Snapshot { respond_to } => {
                let _ = respond_to.send(self.snapshot());
            }
        }
    }

    async fn handle_completion(&mut self, completion: FormCompletion, ctx: &FormContext) {
        let (_, collection) = ctx;
        let FormCompletion::Submitted { result, respond_to } = completion;

        // Every settled submission releases the form, whatever the outcome.
        self.submitting = false;

        let reply = match result {
            Ok(record) => {
                if let Err(e) = collection.add_local(record.clone()).await {
                    warn!(id = %record.id, error = %e, "Created plant not added to collection");
                }
                self.reset();
                info!(id = %record.id, "Plant added");
                Ok(record)
            }
            Err(e) => {
                self.error = Some(SUBMIT_FAILED_MESSAGE.to_string());
                error!(error = %e, "Error adding plant");
                Err(FormError::Service(e))
            }
        };
        let _ = respond_to.send(reply);
    }
}
