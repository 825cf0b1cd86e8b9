//! Key/value persistence
//!
//! Backends for the [`application::KeyValueStore`] port.

use std::{path::Path, sync::Arc};

use application::ports::KeyValueStore;
use tracing::warn;

mod memory_store;
mod redb_store;

pub use memory_store::MemoryKeyValueStore;
pub use redb_store::RedbKeyValueStore;

/// Open the on-disk store, falling back to memory if that fails
///
/// The preference then lasts only for this process.
pub fn open_store_or_memory(path: &Path) -> Arc<dyn KeyValueStore> {
    match RedbKeyValueStore::open(path) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "Preference store unavailable, preferences will not persist"
            );
            Arc::new(MemoryKeyValueStore::new())
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_memory() {
        let dir = tempfile::tempdir().expect("temp dir");
        // A directory cannot be opened as a database file
        let store = open_store_or_memory(dir.path());

        store.set("weather_unit", "F").expect("memory store accepts writes");
        assert_eq!(store.get("weather_unit").expect("get").as_deref(), Some("F"));
    }

    #[test]
    fn locked_store_falls_back_without_losing_data() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("prefs.redb");

        let live = open_store_or_memory(&path);
        live.set("weather_unit", "F").expect("set");

        let other = open_store_or_memory(&path);
        assert_eq!(other.get("weather_unit").expect("get"), None);
        other.set("weather_unit", "C").expect("memory write");

        assert_eq!(live.get("weather_unit").expect("get").as_deref(), Some("F"));
        drop(live);
        let reopened = RedbKeyValueStore::open(&path).expect("reopen");
        assert_eq!(reopened.get("weather_unit").expect("get").as_deref(), Some("F"));
    }

    #[test]
    fn opens_file_store() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("prefs.redb");

        open_store_or_memory(&path)
            .set("weather_unit", "F")
            .expect("set");
        assert!(path.exists());
    }
}
