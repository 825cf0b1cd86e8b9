//! Open-Meteo forecast client
//!
//! HTTP client for the Open-Meteo Forecast API. One request returns the
//! current conditions and a short daily forecast in the location's own
//! timezone.

use std::time::Duration;

use async_trait::async_trait;
use domain::{CurrentConditions, GeoLocation, WeatherReport};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::ForecastResponse;

/// Daily variables requested alongside the current conditions
const DAILY_VARIABLES: &str = "temperature_2m_max,temperature_2m_min,weathercode";

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Weather service answered with a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Response carried no `current_weather` block
    #[error("No current weather data in response")]
    MissingCurrentWeather,
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Open-Meteo API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds. No timeout when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Number of forecast days (1-16, default: 3)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

const fn default_forecast_days() -> u8 {
    3
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            forecast_days: default_forecast_days(),
        }
    }
}

impl WeatherConfig {
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

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Fetch current conditions and the daily forecast for a location
    async fn fetch_report(&self, location: &GeoLocation) -> Result<WeatherReport, WeatherError>;
}

/// Open-Meteo HTTP client implementation
#[derive(Debug)]
pub struct OpenMeteoClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(WeatherConfig::default())
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast", self.config.base_url.trim_end_matches('/'))
    }

    fn query_params(&self, location: &GeoLocation) -> Vec<(&'static str, String)> {
        let days = self.config.forecast_days.clamp(1, 16);
        vec![
            ("latitude", location.latitude().to_string()),
            ("longitude", location.longitude().to_string()),
            ("current_weather", "true".to_string()),
            ("daily", DAILY_VARIABLES.to_string()),
            ("forecast_days", days.to_string()),
            ("timezone", "auto".to_string()),
        ]
    }

    fn parse_response(api_response: ForecastResponse) -> Result<WeatherReport, WeatherError> {
        let current_data = api_response
            .current_weather
            .ok_or(WeatherError::MissingCurrentWeather)?;

        let daily = match api_response.daily.filter(|daily| !daily.time.is_empty()) {
            Some(daily) => Some(daily.into_entries().map_err(WeatherError::ParseError)?),
            None => {
                warn!("Response carried no daily forecast");
                None
            },
        };

        Ok(WeatherReport {
            current: CurrentConditions::from(current_data),
            daily,
        })
    }
}

#[async_trait]
impl WeatherClient for OpenMeteoClient {
    #[instrument(skip(self), fields(lat = %location.latitude(), lon = %location.longitude()))]
    async fn fetch_report(&self, location: &GeoLocation) -> Result<WeatherReport, WeatherError> {
        let url = self.forecast_url();
        let params = self.query_params(location);
        debug!(url = %url, "Fetching weather report");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        let api_response: ForecastResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        if let Some(tz) = &api_response.timezone {
            debug!(timezone = %tz, "Forecast resolved timezone");
        }

        Self::parse_response(api_response)
    }
}
