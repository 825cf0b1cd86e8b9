//! Geocoding adapter - Implements GeocodingPort using integration_weather

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::Place;
use integration_weather::{
    GeocodingClient, GeocodingConfig, GeocodingError, OpenMeteoGeocodingClient,
};
use tracing::{debug, instrument};

/// Adapter for place-name lookups using the Open-Meteo geocoder
pub struct GeocodingAdapter {
    client: Box<dyn GeocodingClient>,
}

impl std::fmt::Debug for GeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAdapter")
            .field("client", &"OpenMeteoGeocodingClient")
            .finish()
    }
}

impl GeocodingAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: GeocodingConfig) -> Result<Self, ApplicationError> {
        let client = OpenMeteoGeocodingClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::with_client(client))
    }

    /// Wrap any geocoding client
    pub fn with_client(client: impl GeocodingClient + 'static) -> Self {
        Self {
            client: Box::new(client),
        }
    }

    fn map_error(err: GeocodingError) -> ApplicationError {
        match err {
            GeocodingError::ConnectionFailed(e) | GeocodingError::RequestFailed(e) => {
                ApplicationError::RequestFailed(e)
            },
            GeocodingError::ParseError(e) => ApplicationError::Unexpected(e),
            GeocodingError::EmptyQuery => ApplicationError::EmptyInput,
        }
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self))]
    async fn resolve(&self, name: &str) -> Result<Option<Place>, ApplicationError> {
        let result = self.client.search(name).await.map_err(Self::map_error);

        match &result {
            Ok(Some(place)) => debug!(place = %place.name, "Resolved place"),
            Ok(None) => debug!("No place matched"),
            Err(e) => debug!(error = %e, "Geocoding failed"),
        }

        result
    }
}
