//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::{GeoLocation, WeatherReport};
use integration_weather::{OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError};
use tracing::{debug, instrument};

/// Adapter for weather services using Open-Meteo API
pub struct WeatherAdapter {
    client: Box<dyn WeatherClient>,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenMeteoClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        Self::with_config(WeatherConfig::default())
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenMeteoClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::with_client(client))
    }

    /// Wrap any weather client
    pub fn with_client(client: impl WeatherClient + 'static) -> Self {
        Self {
            client: Box::new(client),
        }
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ConnectionFailed(e) | WeatherError::RequestFailed(e) => {
                ApplicationError::RequestFailed(e)
            },
            err @ WeatherError::MissingCurrentWeather => {
                ApplicationError::WeatherUnavailable(err.to_string())
            },
            WeatherError::ParseError(e) => ApplicationError::Unexpected(e),
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn fetch(&self, location: &GeoLocation) -> Result<WeatherReport, ApplicationError> {
        let result = self
            .client
            .fetch_report(location)
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(report) => {
                debug!(
                    temperature = report.current.temperature,
                    code = %report.current.weather_code,
                    days = report.daily.as_ref().map_or(0, Vec::len),
                    "Retrieved weather report"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get weather report");
            },
        }

        result
    }
}
