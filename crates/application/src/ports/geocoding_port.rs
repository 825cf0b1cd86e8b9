//! Geocoding port
//!
//! Resolves a free-text place name to coordinates.

use async_trait::async_trait;
use domain::Place;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for place-name resolution
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a name to its best-matching place
    ///
    /// Returns `Ok(None)` when nothing matches. That is an answer, not a failure.
    async fn resolve(&self, name: &str) -> Result<Option<Place>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn GeocodingPort>();
    }

    #[tokio::test]
    async fn mock_resolves_nothing() {
        let mut mock = MockGeocodingPort::new();
        mock.expect_resolve().returning(|_| Ok(None));

        let result = mock.resolve("Atlantis").await;
        assert!(matches!(result, Ok(None)));
    }
}
