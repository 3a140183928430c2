//! Typed REST client for the portal backend.

use crate::error::FetchError;
use portal_domain::catalog::{Course, Equipment, Laboratory, Product, ServiceCenter};
use portal_domain::events::Event;
use portal_domain::orders::Order;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Client for the portal's JSON API.
///
/// Resource endpoints return full entity arrays; all filtering happens
/// client-side afterwards.
pub struct PortalClient {
    http: reqwest::Client,
    base_url: String,
}

impl PortalClient {
    /// Create a client against a base URL (no trailing slash required).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetch and decode a JSON resource.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        debug!(%url, "fetching resource");

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url,
            });
        }

        let bytes = resp.bytes().await?;
        let value: T = serde_json::from_slice(&bytes)
            .map_err(|e| FetchError::Deserialization(e.to_string()))?;
        debug!(%url, "resource decoded");
        Ok(value)
    }

    pub async fn courses(&self) -> Result<Vec<Course>, FetchError> {
        self.get_json("courses").await
    }

    pub async fn products(&self) -> Result<Vec<Product>, FetchError> {
        self.get_json("products").await
    }

    pub async fn laboratories(&self) -> Result<Vec<Laboratory>, FetchError> {
        self.get_json("laboratories").await
    }

    pub async fn equipment(&self) -> Result<Vec<Equipment>, FetchError> {
        self.get_json("equipment").await
    }

    pub async fn events(&self) -> Result<Vec<Event>, FetchError> {
        self.get_json("events").await
    }

    pub async fn orders(&self) -> Result<Vec<Order>, FetchError> {
        self.get_json("orders").await
    }

    pub async fn service_centers(&self) -> Result<Vec<ServiceCenter>, FetchError> {
        self.get_json("service-centers").await
    }
}
