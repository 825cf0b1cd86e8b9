//! Redb-backed key/value store
//!
//! Single-table embedded database holding UTF-8 keys and values. Survives
//! restarts, so the unit preference is remembered across sessions.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use application::{error::StorageError, ports::KeyValueStore};
use redb::{Database, DatabaseError, ReadableDatabase, TableDefinition};
use tracing::{debug, instrument, warn};

/// Table definition for settings
const SETTINGS_TABLE: TableDefinition<&str, &str> = TableDefinition::new("settings");

/// Whether an open error means the file content is unusable
///
/// Only these errors allow the file to be replaced.
fn is_unreadable(error: &DatabaseError) -> bool {
    match error {
        DatabaseError::UpgradeRequired(_)
        | DatabaseError::RepairAborted
        | DatabaseError::Storage(redb::StorageError::Corrupted(_)) => true,
        DatabaseError::Storage(redb::StorageError::Io(e)) => matches!(
            e.kind(),
            std::io::ErrorKind::InvalidData | std::io::ErrorKind::UnexpectedEof
        ),
        _ => false,
    }
}

/// Redb-based persistent key/value store
pub struct RedbKeyValueStore {
    db: Arc<Database>,
    path: Option<PathBuf>,
}

impl std::fmt::Debug for RedbKeyValueStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbKeyValueStore")
            .field("db", &"<Database>")
            .field("path", &self.path)
            .finish()
    }
}

impl RedbKeyValueStore {
    /// Open or create the store at `path`
    ///
    /// A file that exists but is not a usable database is replaced.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path_buf = path.as_ref().to_path_buf();

        if let Some(parent) = path_buf.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                StorageError::Unavailable(format!(
                    "Failed to create directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let db = match Database::create(&path_buf) {
            Ok(db) => db,
            Err(DatabaseError::DatabaseAlreadyOpen) => {
                return Err(StorageError::Unavailable(format!(
                    "{} is locked by another process",
                    path_buf.display()
                )));
            },
            Err(e) if !is_unreadable(&e) => {
                return Err(StorageError::Unavailable(format!(
                    "Failed to open {}: {e}",
                    path_buf.display()
                )));
            },
            Err(e) => {
                warn!(
                    path = %path_buf.display(),
                    error = %e,
                    "Database corrupted or incompatible, recreating"
                );
                if path_buf.exists() {
                    fs::remove_file(&path_buf).map_err(|e| {
                        StorageError::Unavailable(format!(
                            "Failed to remove corrupted database: {e}"
                        ))
                    })?;
                }
                Database::create(&path_buf).map_err(|e| {
                    StorageError::Unavailable(format!("Failed to create Redb database: {e}"))
                })?
            },
        };

        let store = Self {
            db: Arc::new(db),
            path: Some(path_buf),
        };
        store.ensure_table()?;
        debug!(path = ?store.path, "Opened settings store");
        Ok(store)
    }

    /// Create an in-memory Redb store (for testing)
    #[cfg(test)]
    pub fn in_memory() -> Result<Self, StorageError> {
        let db = Database::builder()
            .create_with_backend(redb::backends::InMemoryBackend::new())
            .map_err(|e| {
                StorageError::Unavailable(format!("Failed to create in-memory Redb: {e}"))
            })?;

        let store = Self {
            db: Arc::new(db),
            path: None,
        };
        store.ensure_table()?;
        Ok(store)
    }

    /// Path of the backing file, `None` for in-memory stores
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn ensure_table(&self) -> Result<(), StorageError> {
        let write_txn = self.db.begin_write().map_err(|e| {
            StorageError::Operation(format!("Failed to begin write transaction: {e}"))
        })?;
        {
            // Opening the table creates it if it doesn't exist
            let _ = write_txn.open_table(SETTINGS_TABLE).map_err(|e| {
                StorageError::Operation(format!("Failed to open settings table: {e}"))
            })?;
        }
        write_txn
            .commit()
            .map_err(|e| StorageError::Operation(format!("Failed to commit transaction: {e}")))
    }
}

impl KeyValueStore for RedbKeyValueStore {
    #[instrument(skip(self))]
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let read_txn = self.db.begin_read().map_err(|e| {
            StorageError::Operation(format!("Failed to begin read transaction: {e}"))
        })?;
        let table = read_txn.open_table(SETTINGS_TABLE).map_err(|e| {
            StorageError::Operation(format!("Failed to open settings table: {e}"))
        })?;

        let value = table
            .get(key)
            .map_err(|e| StorageError::Operation(format!("Failed to read {key}: {e}")))?
            .map(|guard| guard.value().to_string());
        Ok(value)
    }

    #[instrument(skip(self))]
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let write_txn = self.db.begin_write().map_err(|e| {
            StorageError::Operation(format!("Failed to begin write transaction: {e}"))
        })?;
        {
            let mut table = write_txn.open_table(SETTINGS_TABLE).map_err(|e| {
                StorageError::Operation(format!("Failed to open settings table: {e}"))
            })?;
            table
                .insert(key, value)
                .map_err(|e| StorageError::Operation(format!("Failed to write {key}: {e}")))?;
        }
        write_txn
            .commit()
            .map_err(|e| StorageError::Operation(format!("Failed to commit transaction: {e}")))
    }
}
