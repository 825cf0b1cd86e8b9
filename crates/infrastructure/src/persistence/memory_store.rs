//! In-memory key/value store
//!
//! Used when the on-disk store cannot be opened, and in tests. Values live
//! for the lifetime of the process.

use std::collections::HashMap;

use application::{error::StorageError, ports::KeyValueStore};
use parking_lot::RwLock;

/// Process-local key/value store
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_missing_is_none() {
        let store = MemoryKeyValueStore::new();
        assert_eq!(store.get("weather_unit").expect("get"), None);
    }

    #[test]
    fn set_then_get() {
        let store = MemoryKeyValueStore::new();
        store.set("weather_unit", "F").expect("set");
        assert_eq!(store.get("weather_unit").expect("get").as_deref(), Some("F"));

        store.set("weather_unit", "C").expect("set");
        assert_eq!(store.get("weather_unit").expect("get").as_deref(), Some("C"));
    }
}
