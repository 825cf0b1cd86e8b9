//! Open-Meteo integration
//!
//! Clients for the Open-Meteo Forecast API (<https://open-meteo.com>) and the
//! Open-Meteo Geocoding API. Neither requires an API key.

pub mod client;
pub mod geocoding;
mod models;

pub use client::{OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError};
pub use geocoding::{GeocodingClient, GeocodingConfig, GeocodingError, OpenMeteoGeocodingClient};
