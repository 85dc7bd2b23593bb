//! HTTP-backed [`CatalogApi`] implementation for the vendor cloud REST API

use crate::api::{ApiResult, CatalogApi};
use async_trait::async_trait;
use hubgen_core::{ApiError, Capability, Device, Location, LocationRef, Room, Scene};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// List endpoints wrap their payload in an `items` envelope
#[derive(Deserialize)]
struct Items<T> {
    items: Vec<T>,
}

/// Bearer-token REST client for the remote catalog.
///
/// Performs exactly one HTTP request per call; retry and throttling live in
/// the acquisition engine, not here.
pub struct HttpCatalogApi {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl HttpCatalogApi {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(ApiError::RateLimited);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))
    }

    async fn get_items<T: DeserializeOwned>(&self, path: &str) -> ApiResult<Vec<T>> {
        Ok(self.get_json::<Items<T>>(path).await?.items)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn list_devices(&self) -> ApiResult<Vec<Device>> {
        self.get_items("devices").await
    }

    async fn list_scenes(&self) -> ApiResult<Vec<Scene>> {
        self.get_items("scenes").await
    }

    async fn list_location_refs(&self) -> ApiResult<Vec<LocationRef>> {
        self.get_items("locations").await
    }

    async fn get_location(&self, location_id: &str) -> ApiResult<Location> {
        self.get_json(&format!("locations/{location_id}")).await
    }

    async fn list_rooms(&self, location_id: &str) -> ApiResult<Vec<Room>> {
        self.get_items(&format!("locations/{location_id}/rooms"))
            .await
    }

    async fn get_capability(&self, id: &str, version: u32) -> ApiResult<Capability> {
        self.get_json(&format!("capabilities/{id}/{version}")).await
    }
}
