//! IP-geolocation collaborator.
//!
//! Consulted only when a signed-in profile has no stored country. Callers
//! must treat failure as a soft signal and fall back; nothing in checkout
//! may block on this lookup.

use crate::error::FetchError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of an IP-geolocation lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeoLocation {
    #[serde(default)]
    pub country_name: String,
    #[serde(default)]
    pub country_code: String,
}

/// A collaborator that can geolocate the current client.
#[async_trait]
pub trait GeoLookup: Send + Sync {
    async fn lookup(&self) -> Result<GeoLocation, FetchError>;
}

/// Geolocation over a JSON HTTP endpoint (ip-api style).
pub struct IpApiGeo {
    http: reqwest::Client,
    endpoint: String,
}

impl IpApiGeo {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl GeoLookup for IpApiGeo {
    async fn lookup(&self) -> Result<GeoLocation, FetchError> {
        debug!(endpoint = %self.endpoint, "geolocation lookup");
        let resp = self.http.get(&self.endpoint).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url: self.endpoint.clone(),
            });
        }
        let location: GeoLocation = resp.json().await?;
        Ok(location)
    }
}
