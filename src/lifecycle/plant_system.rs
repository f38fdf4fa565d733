use crate::clients::{CollectionClient, FormClient};
use crate::service::SharedPlantService;
use tracing::{error, info};

/// The runtime orchestrator for a plant catalog session.
///
/// `PlantSystem` starts the collection and form controllers against one
/// [`PlantService`](crate::service::PlantService), wires the form to the
/// collection, and shuts both down again.
///
/// # Example
///
/// ```ignore
/// let system = PlantSystem::new(Arc::new(HttpPlantService::new(&config)?));
///
/// let loaded = system.collection.settled().await?;
/// system.form.update_field(DraftField::Name, "Fern").await?;
/// let record = system.form.submit().await?;
///
/// system.shutdown().await?;
/// ```
pub struct PlantSystem {
    /// Client for the collection controller
    pub collection: CollectionClient,

    /// Client for the new-plant form controller
    pub form: FormClient,

    /// Task handles for both controllers (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl PlantSystem {
    /// Creates both controllers and starts them.
    ///
    /// The collection begins its initial load immediately; use
    /// [`CollectionClient::settled`] to wait for it.
    pub fn new(service: SharedPlantService) -> Self {
        let (collection_actor, collection) = crate::collection::new();
        let (form_actor, form) = crate::form::new();

        let collection_handle = tokio::spawn(collection_actor.run(service.clone()));

        // The form creates plants and hands them to the collection
        let form_handle = tokio::spawn(form_actor.run((service, collection.clone())));

        Self {
            collection,
            form,
            handles: vec![collection_handle, form_handle],
        }
    }

    /// Gracefully shuts down both controllers.
    ///
    /// Dropping the clients closes the request channels. The form is stopped
    /// first since it holds a collection client of its own.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if both controllers shut down cleanly
    /// - `Err(String)` if a controller task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down plant system...");

        drop(self.form);
        drop(self.collection);

        // Handles are in start order; await the form before the collection.
        for handle in self.handles.into_iter().rev() {
            if let Err(e) = handle.await {
                error!("Controller task failed: {:?}", e);
                return Err(format!("Controller task failed: {:?}", e));
            }
        }

        info!("Plant system shutdown complete.");
        Ok(())
    }
}
