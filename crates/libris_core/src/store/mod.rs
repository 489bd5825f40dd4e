//! Catalog storage contracts and JSON file implementation.
//!
//! # Responsibility
//! - Define the persistence seam between the inventory and durable storage.
//! - Keep file-format details inside the core persistence boundary.
//!
//! # Invariants
//! - `save` always writes the whole catalog; there is no append or
//!   incremental update mode.
//! - `load` either yields every persisted record validated, or fails as a
//!   whole; malformed documents are never partially recovered.

use crate::model::book::{Book, BookValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage error for catalog load/save operations.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Json(serde_json::Error),
    InvalidRecord(BookValidationError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "{err}"),
            Self::InvalidRecord(err) => write!(f, "invalid persisted book record: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::InvalidRecord(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<BookValidationError> for StoreError {
    fn from(value: BookValidationError) -> Self {
        Self::InvalidRecord(value)
    }
}

/// Storage interface for whole-catalog persistence.
pub trait CatalogStore {
    /// Loads every persisted record in catalog order.
    ///
    /// A missing backing document is an empty catalog, not an error.
    fn load(&self) -> StoreResult<Vec<Book>>;

    /// Overwrites the backing document with the given catalog.
    fn save(&self, books: &[Book]) -> StoreResult<()>;
}

/// JSON-document-backed catalog store.
///
/// The document is a single pretty-printed array of book records. Each save
/// replaces the entire file content.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file location.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogStore for JsonFileStore {
    fn load(&self) -> StoreResult<Vec<Book>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        let books: Vec<Book> = serde_json::from_str(&content)?;
        for book in &books {
            book.validate()?;
        }
        Ok(books)
    }

    fn save(&self, books: &[Book]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let document = serde_json::to_string_pretty(books)?;
        fs::write(&self.path, document)?;
        Ok(())
    }
}
