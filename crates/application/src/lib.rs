//! Application layer - Use cases and orchestration
//!
//! Contains the lookup use case, the page presenter and port definitions.
//! Orchestrates domain objects and infrastructure adapters.

pub mod error;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, StorageError};
pub use ports::*;
pub use services::*;
