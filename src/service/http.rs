//! # HTTP Plant Service
//!
//! [`PlantService`] over the REST endpoint:
//!
//! - `GET /plants` returns the full list
//! - `POST /plants` creates a record and returns it with its id
//! - `DELETE /plants/{id}` removes a record; the body is ignored
//!
//! Any non-2xx status is reported as [`ServiceError::Status`].

use crate::model::{NewPlant, PlantId, PlantRecord};
use crate::service::{PlantService, ServiceConfig, ServiceError};
use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::{debug, instrument};
use url::Url;

/// Client for the remote plant service.
#[derive(Debug, Clone)]
pub struct HttpPlantService {
    client: Client,
    plants_url: Url,
}

impl HttpPlantService {
    pub fn new(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let mut base = Url::parse(&config.base_url)
            .map_err(|e| ServiceError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        // Keep a base path such as "/api" when joining "plants" onto it.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let plants_url = base
            .join("plants")
            .map_err(|e| ServiceError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        Ok(Self { client, plants_url })
    }

    /// URL of the collection resource.
    pub fn plants_url(&self) -> &Url {
        &self.plants_url
    }

    fn plant_url(&self, id: &PlantId) -> Result<Url, ServiceError> {
        let mut url = self.plants_url.clone();
        url.path_segments_mut()
            .map_err(|_| ServiceError::InvalidUrl(self.plants_url.to_string()))?
            .push(&id.to_string());
        Ok(url)
    }
}

fn check_status(response: Response) -> Result<Response, ServiceError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ServiceError::status(status.as_u16(), response.url().path()))
    }
}

fn transport(e: reqwest::Error) -> ServiceError {
    ServiceError::Transport(e.to_string())
}

fn decode(e: reqwest::Error) -> ServiceError {
    ServiceError::Decode(e.to_string())
}

#[async_trait]
impl PlantService for HttpPlantService {
    #[instrument(skip(self), fields(url = %self.plants_url))]
    async fn list(&self) -> Result<Vec<PlantRecord>, ServiceError> {
        debug!("Sending request");
        let response = self
            .client
            .get(self.plants_url.clone())
            .send()
            .await
            .map_err(transport)?;
        check_status(response)?.json().await.map_err(decode)
    }

    #[instrument(skip(self, plant), fields(url = %self.plants_url))]
    async fn create(&self, plant: NewPlant) -> Result<PlantRecord, ServiceError> {
        debug!(?plant, "Sending request");
        let response = self
            .client
            .post(self.plants_url.clone())
            .json(&plant)
            .send()
            .await
            .map_err(transport)?;
        check_status(response)?.json().await.map_err(decode)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &PlantId) -> Result<(), ServiceError> {
        debug!("Sending request");
        let response = self
            .client
            .delete(self.plant_url(id)?)
            .send()
            .await
            .map_err(transport)?;
        check_status(response)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_targets_local_plants() {
        let service = HttpPlantService::new(&ServiceConfig::default()).unwrap();
        assert_eq!(service.plants_url().as_str(), "http://localhost:6001/plants");
    }

    #[test]
    fn test_base_path_is_kept() {
        let service = HttpPlantService::new(&ServiceConfig::new("http://example.com/api")).unwrap();
        assert_eq!(service.plants_url().as_str(), "http://example.com/api/plants");
    }

    #[test]
    fn test_plant_url_escapes_ids() {
        let service = HttpPlantService::new(&ServiceConfig::default()).unwrap();
        let url = service.plant_url(&PlantId::from("a b")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:6001/plants/a%20b");
        let url = service.plant_url(&PlantId::from(3u64)).unwrap();
        assert_eq!(url.as_str(), "http://localhost:6001/plants/3");
    }

    #[test]
    fn test_rejects_unparseable_base_url() {
        let result = HttpPlantService::new(&ServiceConfig::new("not a url"));
        assert!(matches!(result, Err(ServiceError::InvalidUrl(_))));
    }
}
