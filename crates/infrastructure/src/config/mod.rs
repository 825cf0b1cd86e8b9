//! Application configuration
//!
//! Loaded in layers: built-in defaults, then an optional TOML file, then
//! `SKYCAST_*` environment variables (`__` separates sections, e.g.
//! `SKYCAST_WEATHER__TIMEOUT_SECS=10`).

use std::path::{Path, PathBuf};

use integration_weather::{GeocodingConfig, WeatherConfig};
use serde::{Deserialize, Serialize};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "SKYCAST";

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config";

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the preference database
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("skycast.redb")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_filter")]
    pub filter: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Forecast API settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Geocoding API settings
    #[serde(default)]
    pub geocoding: GeocodingConfig,

    /// Preference storage
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `./config.toml` (if present) and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading `path` instead of the default file
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with_env(path, Self::environment())
    }

    /// `SKYCAST_*` variables, `__` between section and key
    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn load_with_env(
        path: Option<&Path>,
        env: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = config::Config::builder()
            .add_source(file)
            // Override with environment variables (e.g., SKYCAST_STORAGE__PATH)
            .add_source(env);

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        validate_base_url("weather.base_url", &self.weather.base_url)?;
        validate_base_url("geocoding.base_url", &self.geocoding.base_url)?;

        if !(1..=16).contains(&self.weather.forecast_days) {
            return Err(config::ConfigError::Message(format!(
                "weather.forecast_days must be between 1 and 16, got {}",
                self.weather.forecast_days
            )));
        }

        if self.storage.path.as_os_str().is_empty() {
            return Err(config::ConfigError::Message(
                "storage.path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn validate_base_url(key: &str, url: &str) -> Result<(), config::ConfigError> {
    if url.trim().is_empty() {
        return Err(config::ConfigError::Message(format!(
            "{key} must not be empty"
        )));
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(config::ConfigError::Message(format!(
            "{key} must start with http:// or https://, got {url:?}"
        )));
    }
    Ok(())
}
