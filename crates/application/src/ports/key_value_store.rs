//! Key/value store port
//!
//! A tiny string-to-string store for settings that outlive a session.

#[cfg(test)]
use mockall::automock;

use crate::error::StorageError;

/// Port for persisting small string values
#[cfg_attr(test, automock)]
pub trait KeyValueStore: Send + Sync {
    /// Read a value
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
