//! Application-level errors

use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Submitted query was empty after trimming
    #[error("Empty input")]
    EmptyInput,

    /// A remote service answered with a failure or could not be reached
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The weather service returned no usable current conditions
    #[error("Weather unavailable: {0}")]
    WeatherUnavailable(String),

    /// Anything else that went wrong while handling a lookup
    #[error("Unexpected error: {0}")]
    Unexpected(String),

    /// An adapter could not be built from its configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Errors from the key/value store backing the unit preference
#[derive(Debug, Error)]
pub enum StorageError {
    /// Backend could not be opened or used
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Read or write failed
    #[error("Storage operation failed: {0}")]
    Operation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            ApplicationError::RequestFailed("HTTP 503".to_string()).to_string(),
            "Request failed: HTTP 503"
        );
        assert_eq!(
            ApplicationError::Configuration("no TLS backend".to_string()).to_string(),
            "Configuration error: no TLS backend"
        );
        assert_eq!(
            StorageError::Operation("disk full".to_string()).to_string(),
            "Storage operation failed: disk full"
        );
    }
}
