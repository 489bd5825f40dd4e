//! Core domain logic for the libris catalog manager.
//! This crate is the single source of truth for catalog invariants.

pub mod inventory;
pub mod logging;
pub mod model;
pub mod store;

pub use inventory::Inventory;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::book::{Book, BookStatus, BookValidationError};
pub use store::{CatalogStore, JsonFileStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
