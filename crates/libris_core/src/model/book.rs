//! Book domain model.
//!
//! # Responsibility
//! - Define the canonical catalog record and its availability lifecycle.
//! - Provide the issue/return transition helpers used by the inventory.
//!
//! # Invariants
//! - `status` is always one of the two enumerated values.
//! - `isbn` is the stable identity of a record; the inventory enforces
//!   uniqueness across the catalog.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Availability state of a single catalog record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    /// On the shelf, can be issued.
    Available,
    /// Checked out; must be returned before it can be issued again.
    Issued,
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Issued => write!(f, "issued"),
        }
    }
}

/// Validation error for persisted or constructed book records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookValidationError {
    EmptyTitle,
    EmptyAuthor,
    EmptyIsbn,
}

impl Display for BookValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "book title must not be empty"),
            Self::EmptyAuthor => write!(f, "book author must not be empty"),
            Self::EmptyIsbn => write!(f, "book isbn must not be empty"),
        }
    }
}

impl Error for BookValidationError {}

/// One catalog entry.
///
/// All required fields are mandatory on the wire as well: a persisted record
/// missing a field, or carrying a `status` outside the two-value enumeration,
/// fails decoding instead of being admitted in a partial shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Human-readable title, matched case-insensitively by title search.
    pub title: String,
    /// Author display name.
    pub author: String,
    /// Unique identifier text, matched case-sensitively.
    pub isbn: String,
    /// Current availability state.
    pub status: BookStatus,
}

impl Book {
    /// Creates a new catalog record, initially available.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            status: BookStatus::Available,
        }
    }

    /// Checks that all identity/display fields carry non-blank text.
    ///
    /// The load path runs this on every decoded record so that malformed
    /// storage content is rejected instead of entering the catalog.
    pub fn validate(&self) -> Result<(), BookValidationError> {
        if self.title.trim().is_empty() {
            return Err(BookValidationError::EmptyTitle);
        }
        if self.author.trim().is_empty() {
            return Err(BookValidationError::EmptyAuthor);
        }
        if self.isbn.trim().is_empty() {
            return Err(BookValidationError::EmptyIsbn);
        }
        Ok(())
    }

    /// Marks the book as issued.
    ///
    /// Returns `false` without state change when the book is already issued.
    pub fn issue(&mut self) -> bool {
        if self.status == BookStatus::Issued {
            return false;
        }
        self.status = BookStatus::Issued;
        true
    }

    /// Marks the book as available again.
    ///
    /// Returns `false` without state change when the book is already
    /// available.
    pub fn return_book(&mut self) -> bool {
        if self.status == BookStatus::Available {
            return false;
        }
        self.status = BookStatus::Available;
        true
    }

    /// Returns whether the book can currently be issued.
    pub fn is_available(&self) -> bool {
        self.status == BookStatus::Available
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} by {} (ISBN: {}) - {}",
            self.title, self.author, self.isbn, self.status
        )
    }
}
