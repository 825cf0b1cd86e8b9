//! Persisted temperature unit preference
//!
//! Stored under a single key as `"C"` or `"F"`. Reads never fail: missing,
//! unrecognized or unreadable values fall back to Celsius.

use std::sync::Arc;

use domain::TemperatureUnit;
use tracing::{debug, warn};

use crate::{error::StorageError, ports::KeyValueStore};

/// Storage key for the unit preference
pub const UNIT_KEY: &str = "weather_unit";

/// Reads and writes the user's preferred temperature unit
#[derive(Clone)]
pub struct UnitPreferenceStore {
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for UnitPreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnitPreferenceStore").finish_non_exhaustive()
    }
}

impl UnitPreferenceStore {
    /// Wrap a key/value store
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Current preference, Celsius when absent or unrecognized
    pub fn get(&self) -> TemperatureUnit {
        match self.store.get(UNIT_KEY) {
            Ok(Some(code)) => TemperatureUnit::from_code(&code).unwrap_or_else(|| {
                debug!(%code, "Ignoring unrecognized stored unit");
                TemperatureUnit::default()
            }),
            Ok(None) => TemperatureUnit::default(),
            Err(e) => {
                warn!(error = %e, "Could not read unit preference");
                TemperatureUnit::default()
            },
        }
    }

    /// Persist a preference. Writing the same value twice is harmless.
    pub fn set(&self, unit: TemperatureUnit) -> Result<(), StorageError> {
        self.store.set(UNIT_KEY, unit.code())
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::ports::MockKeyValueStore;

    fn store_with(value: Result<Option<String>, StorageError>) -> UnitPreferenceStore {
        let mut mock = MockKeyValueStore::new();
        let mut value = Some(value);
        mock.expect_get()
            .with(eq(UNIT_KEY))
            .times(1)
            .returning(move |_| value.take().unwrap_or(Ok(None)));
        UnitPreferenceStore::new(Arc::new(mock))
    }

    #[test]
    fn absent_defaults_to_celsius() {
        assert_eq!(store_with(Ok(None)).get(), TemperatureUnit::Celsius);
    }

    #[test]
    fn stored_fahrenheit_is_read() {
        assert_eq!(
            store_with(Ok(Some("F".to_string()))).get(),
            TemperatureUnit::Fahrenheit
        );
    }

    #[test]
    fn unrecognized_defaults_to_celsius() {
        assert_eq!(
            store_with(Ok(Some("kelvin".to_string()))).get(),
            TemperatureUnit::Celsius
        );
        // lower-case codes were never written, so they do not count
        assert_eq!(
            store_with(Ok(Some("f".to_string()))).get(),
            TemperatureUnit::Celsius
        );
    }

    #[test]
    fn read_failure_defaults_to_celsius() {
        let store = store_with(Err(StorageError::Unavailable("locked".to_string())));
        assert_eq!(store.get(), TemperatureUnit::Celsius);
    }

    #[test]
    fn set_writes_unit_code() {
        let mut mock = MockKeyValueStore::new();
        mock.expect_set()
            .with(eq(UNIT_KEY), eq("F"))
            .times(2)
            .returning(|_, _| Ok(()));

        let store = UnitPreferenceStore::new(Arc::new(mock));
        assert!(store.set(TemperatureUnit::Fahrenheit).is_ok());
        assert!(store.set(TemperatureUnit::Fahrenheit).is_ok());
    }

    #[test]
    fn set_surfaces_storage_error() {
        let mut mock = MockKeyValueStore::new();
        mock.expect_set()
            .returning(|_, _| Err(StorageError::Operation("read-only".to_string())));

        let store = UnitPreferenceStore::new(Arc::new(mock));
        assert!(store.set(TemperatureUnit::Celsius).is_err());
    }
}
