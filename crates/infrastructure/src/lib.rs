//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: Open-Meteo adapters,
//! preference storage, configuration loading and logging setup.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, LoggingConfig, StorageConfig};
pub use persistence::{MemoryKeyValueStore, RedbKeyValueStore, open_store_or_memory};
pub use telemetry::{TelemetryError, init_logging};
