//! Catalog inventory use-cases.
//!
//! # Responsibility
//! - Own the in-memory catalog and enforce ISBN uniqueness.
//! - Dispatch issue/return transitions to book records.
//! - Synchronize the catalog to durable storage after every mutation.
//!
//! # Invariants
//! - At most one book per distinct ISBN in the catalog.
//! - Catalog order is insertion order.
//! - No operation panics or terminates the process; every failure path
//!   degrades to a logged event plus a boolean/optional result.

use crate::model::book::Book;
use crate::store::CatalogStore;
use log::{error, info};

/// Catalog owner coordinating lookups, transitions and persistence.
///
/// Persistence is best-effort by design: a failed save is logged and the
/// in-memory mutation that triggered it stands, so memory and disk can
/// diverge until the next successful save. Callers get the in-memory
/// outcome either way.
pub struct Inventory<S: CatalogStore> {
    store: S,
    books: Vec<Book>,
}

impl<S: CatalogStore> Inventory<S> {
    /// Creates an inventory by loading the catalog from the given store.
    ///
    /// A load failure (unreadable, unparsable or schema-invalid document)
    /// degrades to an empty catalog with an error event; it is never
    /// surfaced to the caller.
    pub fn new(store: S) -> Self {
        let books = match store.load() {
            Ok(books) => {
                info!(
                    "event=catalog_load module=inventory status=ok count={}",
                    books.len()
                );
                books
            }
            Err(err) => {
                error!(
                    "event=catalog_load module=inventory status=error error={err}"
                );
                Vec::new()
            }
        };
        Self { store, books }
    }

    /// Adds a book to the catalog and persists.
    ///
    /// Adding an ISBN that already exists is a silent skip (logged, no error
    /// to the caller), preserving the existing entry unchanged.
    pub fn add_book(&mut self, book: Book) {
        if self.search_by_isbn(&book.isbn).is_some() {
            info!(
                "event=book_add module=inventory status=skip isbn={} reason=duplicate_isbn",
                book.isbn
            );
            return;
        }
        info!("event=book_add module=inventory status=ok isbn={}", book.isbn);
        self.books.push(book);
        self.persist();
    }

    /// Returns all books whose title contains `needle`, case-insensitively,
    /// in catalog order.
    pub fn search_by_title(&self, needle: &str) -> Vec<&Book> {
        let needle = needle.to_lowercase();
        self.books
            .iter()
            .filter(|book| book.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Returns the book with exactly this ISBN, if present.
    pub fn search_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.isbn == isbn)
    }

    /// Returns the rendered description line of every book in catalog order.
    pub fn display_all(&self) -> Vec<String> {
        self.books.iter().map(Book::to_string).collect()
    }

    /// Issues the book with this ISBN.
    ///
    /// Returns `false` when the ISBN is unknown or the book is already
    /// issued; only a successful transition persists the catalog.
    pub fn issue_book(&mut self, isbn: &str) -> bool {
        let Some(book) = self.books.iter_mut().find(|book| book.isbn == isbn) else {
            error!(
                "event=book_issue module=inventory status=error isbn={isbn} error_code=not_found"
            );
            return false;
        };
        if !book.issue() {
            info!(
                "event=book_issue module=inventory status=skip isbn={isbn} reason=already_issued"
            );
            return false;
        }
        info!("event=book_issue module=inventory status=ok isbn={isbn}");
        self.persist();
        true
    }

    /// Returns the book with this ISBN to the shelf.
    ///
    /// Returns `false` when the ISBN is unknown or the book is already
    /// available; only a successful transition persists the catalog.
    pub fn return_book(&mut self, isbn: &str) -> bool {
        let Some(book) = self.books.iter_mut().find(|book| book.isbn == isbn) else {
            error!(
                "event=book_return module=inventory status=error isbn={isbn} error_code=not_found"
            );
            return false;
        };
        if !book.return_book() {
            info!(
                "event=book_return module=inventory status=skip isbn={isbn} reason=already_available"
            );
            return false;
        }
        info!("event=book_return module=inventory status=ok isbn={isbn}");
        self.persist();
        true
    }

    /// Number of books in the catalog.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns whether the catalog holds no books.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    fn persist(&self) {
        match self.store.save(&self.books) {
            Ok(()) => info!(
                "event=catalog_save module=inventory status=ok count={}",
                self.books.len()
            ),
            Err(err) => error!(
                "event=catalog_save module=inventory status=error error={err}"
            ),
        }
    }
}
