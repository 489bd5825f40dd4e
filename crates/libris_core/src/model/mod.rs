//! Domain model for the library catalog.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every record is identified by its `isbn` text field.
//! - No record is ever hard-deleted; availability is the only mutable state.

pub mod book;
