//! The catalog manager: the one stateful component of the system.
//!
//! Owns the in-memory record collection plus the current view, search term,
//! and transient editing cursor. Every mutation applies to memory first and
//! then re-persists the whole collection through the injected store. The
//! in-memory collection stays the source of truth for the session even when
//! a write fails.

use tracing::{info, warn};

use crate::error::{CatalogError, Result};
use crate::models::{BookRecord, MAX_AUTHOR_LEN, MAX_TITLE_LEN, SEED_BOOKS};
use crate::traits::CatalogStore;
use crate::types::{BookId, CatalogStats, View};

/// Reading-list catalog backed by a pluggable store.
///
/// Mutating operations take `&mut self` and await their persistence write
/// before returning, so operations never overlap: one complete state
/// transition at a time.
pub struct CatalogManager {
    store: Box<dyn CatalogStore>,
    books: Vec<BookRecord>,
    current_view: View,
    search_term: String,
    editing: Option<BookId>,
}

impl CatalogManager {
    /// Open a catalog on top of `store`.
    ///
    /// Hydrates the collection from the store; when the store holds nothing,
    /// seeds the list with the fixed starter books and persists immediately.
    pub async fn open(store: Box<dyn CatalogStore>) -> Result<Self> {
        let books = store.load_books().await?;

        let mut manager = Self {
            store,
            books,
            current_view: View::All,
            search_term: String::new(),
            editing: None,
        };

        if manager.books.is_empty() {
            for (title, author) in SEED_BOOKS {
                let (title, author) = validate_fields(title, author)?;
                manager.books.push(BookRecord::new(&title, &author));
            }
            // Storage failures are non-fatal; the seeded collection stays
            // authoritative in memory and the session continues.
            if let Err(e) = manager.persist("seed reading list").await {
                warn!("Could not persist the seeded reading list: {}", e);
            }
            info!("Seeded reading list with {} starter books", SEED_BOOKS.len());
        } else {
            info!("Loaded {} books from store", manager.books.len());
        }

        Ok(manager)
    }

    // === Mutations ===

    /// Add a new book to the list.
    ///
    /// Trims both fields, rejects empty or oversized values, and rejects a
    /// case-insensitive (title, author) duplicate of an existing record.
    pub async fn add_book(&mut self, title: &str, author: &str) -> Result<BookRecord> {
        let (title, author) = validate_fields(title, author)?;

        if self.is_duplicate(&title, &author) {
            return Err(CatalogError::Duplicate { title, author });
        }

        let book = BookRecord::new(&title, &author);
        self.books.push(book.clone());
        self.persist("add book").await?;

        Ok(book)
    }

    /// Overwrite the title and author of an existing book.
    ///
    /// Runs the same field validation as [`add_book`](Self::add_book); id,
    /// read status, and the added date are untouched. Does not re-check
    /// duplicates.
    pub async fn update_book(
        &mut self,
        id: &BookId,
        title: &str,
        author: &str,
    ) -> Result<BookRecord> {
        let index = self.find_index(id)?;
        let (title, author) = validate_fields(title, author)?;

        self.books[index].title = title;
        self.books[index].author = author;
        let book = self.books[index].clone();

        self.persist("update book").await?;
        Ok(book)
    }

    /// Remove a book from the list.
    pub async fn remove_book(&mut self, id: &BookId) -> Result<()> {
        let index = self.find_index(id)?;
        self.books.remove(index);
        self.persist("remove book").await
    }

    /// Flip the read status of a book.
    pub async fn toggle_read(&mut self, id: &BookId) -> Result<BookRecord> {
        let index = self.find_index(id)?;

        self.books[index].is_read = !self.books[index].is_read;
        let book = self.books[index].clone();

        self.persist("toggle read status").await?;
        Ok(book)
    }

    /// Empty the whole list unconditionally.
    pub async fn clear_all(&mut self) -> Result<()> {
        self.books.clear();
        self.persist("clear reading list").await
    }

    // === View state ===

    /// Set the active view filter.
    pub fn set_view(&mut self, view: View) {
        self.current_view = view;
    }

    /// Set the active free-text search term.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Mark a book as being edited. The id is a transient cursor for the
    /// presentation layer; it is not required to exist in the collection.
    pub fn begin_edit(&mut self, id: BookId) {
        self.editing = Some(id);
    }

    /// Clear the editing cursor.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// The book currently being edited, if any.
    pub fn editing(&self) -> Option<&BookId> {
        self.editing.as_ref()
    }

    // === Derived views ===

    /// The collection as seen through the current view and search term.
    ///
    /// Computed fresh on every call: view filter, then case-insensitive
    /// substring search over title or author, then a stable sort putting
    /// unread books first and newer books before older ones within the same
    /// read status.
    pub fn filtered_books(&self) -> Vec<BookRecord> {
        let term = self.search_term.trim().to_lowercase();

        let mut books: Vec<BookRecord> = self
            .books
            .iter()
            .filter(|book| match self.current_view {
                View::All => true,
                View::ToRead => !book.is_read,
                View::Read => book.is_read,
            })
            .filter(|book| term.is_empty() || book.matches_search(&term))
            .cloned()
            .collect();

        books.sort_by(|a, b| {
            a.is_read
                .cmp(&b.is_read)
                .then_with(|| b.date_added.cmp(&a.date_added))
        });

        books
    }

    /// Current catalog statistics.
    pub fn stats(&self) -> CatalogStats {
        let read = self.books.iter().filter(|book| book.is_read).count() as u64;
        let total = self.books.len() as u64;
        CatalogStats {
            total,
            read,
            to_read: total - read,
        }
    }

    /// The full collection, in insertion order.
    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    /// The active view filter.
    pub fn current_view(&self) -> View {
        self.current_view
    }

    /// The active search term, as set.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Look up a book by id.
    pub fn get_book(&self, id: &BookId) -> Option<&BookRecord> {
        self.books.iter().find(|book| &book.id == id)
    }

    // === Internals ===

    fn find_index(&self, id: &BookId) -> Result<usize> {
        self.books
            .iter()
            .position(|book| &book.id == id)
            .ok_or_else(|| CatalogError::BookNotFound {
                id: id.to_string(),
            })
    }

    fn is_duplicate(&self, title: &str, author: &str) -> bool {
        let key = (title.to_lowercase(), author.to_lowercase());
        self.books.iter().any(|book| book.duplicate_key() == key)
    }

    /// Write the whole collection through the store.
    ///
    /// A failed write leaves the in-memory collection untouched and is
    /// surfaced as a storage failure; memory stays authoritative for the
    /// rest of the session.
    async fn persist(&self, operation: &str) -> Result<()> {
        if let Err(e) = self.store.save_books(&self.books).await {
            warn!("Persist failed during '{}': {}", operation, e);
            return Err(CatalogError::StorageOperationFailed {
                operation: operation.to_string(),
                source: Some(eyre::Report::new(e)),
            });
        }
        Ok(())
    }
}

/// Trim and validate a (title, author) pair against the creation rules.
fn validate_fields(title: &str, author: &str) -> Result<(String, String)> {
    let title = title.trim();
    let author = author.trim();

    if title.is_empty() {
        return Err(CatalogError::required("title", "Title"));
    }
    if author.is_empty() {
        return Err(CatalogError::required("author", "Author"));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(CatalogError::too_long("title", "Title", MAX_TITLE_LEN));
    }
    if author.chars().count() > MAX_AUTHOR_LEN {
        return Err(CatalogError::too_long("author", "Author", MAX_AUTHOR_LEN));
    }

    Ok((title.to_string(), author.to_string()))
}
