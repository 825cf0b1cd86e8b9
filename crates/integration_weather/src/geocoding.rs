//! Open-Meteo geocoding client
//!
//! Resolves a free-text place name to the single best-matching place using
//! the [Open-Meteo Geocoding API](https://open-meteo.com/en/docs/geocoding-api).

use std::time::Duration;

use async_trait::async_trait;
use domain::Place;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::GeocodingResponse;

/// Configuration for the geocoding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Base URL for the geocoding API
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,

    /// Request timeout in seconds. No timeout when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Language for returned place names
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            timeout_secs: None,
            language: default_language(),
        }
    }
}

impl GeocodingConfig {
    /// Configuration pointing at a local mock server
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: Some(5),
            ..Default::default()
        }
    }
}

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Geocoding service answered with a non-success status
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse geocoding response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// Query was empty after trimming
    #[error("Geocoding query must not be empty")]
    EmptyQuery,
}

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve a place name to its best match
    ///
    /// `Ok(None)` means the service knows no such place.
    async fn search(&self, name: &str) -> Result<Option<Place>, GeocodingError>;
}

/// Open-Meteo geocoding client
#[derive(Debug)]
pub struct OpenMeteoGeocodingClient {
    client: Client,
    config: GeocodingConfig,
}

impl OpenMeteoGeocodingClient {
    /// Create a new geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: GeocodingConfig) -> Result<Self, GeocodingError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, GeocodingError> {
        Self::new(GeocodingConfig::default())
    }
}

#[async_trait]
impl GeocodingClient for OpenMeteoGeocodingClient {
    #[instrument(skip(self))]
    async fn search(&self, name: &str) -> Result<Option<Place>, GeocodingError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GeocodingError::EmptyQuery);
        }

        let url = format!("{}/search", self.config.base_url.trim_end_matches('/'));
        let params = [
            ("name", name.to_string()),
            ("count", "1".to_string()),
            ("language", self.config.language.clone()),
            ("format", "json".to_string()),
        ];

        debug!(url = %url, %name, "Geocoding place name");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GeocodingError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body: GeocodingResponse = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let Some(first) = body.results.and_then(|results| results.into_iter().next()) else {
            debug!(%name, "No geocoding match");
            return Ok(None);
        };

        let place =
            Place::try_from(first).map_err(|e| GeocodingError::ParseError(e.to_string()))?;
        debug!(
            %name,
            lat = %place.latitude(),
            lon = %place.longitude(),
            "Geocoded place"
        );

        Ok(Some(place))
    }
}
