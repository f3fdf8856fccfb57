//! Trait definitions for reading-list persistence.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::BookRecord;

/// Fixed key naming the reading-list namespace inside a store.
///
/// The filesystem backend derives its file name from this; other backends
/// can use it as a literal key. There is no version field in the payload.
pub const STORAGE_KEY: &str = "reading-list";

/// Persistence seam for the catalog.
///
/// The catalog treats the store as a simple key-value collaborator: one read
/// at startup to hydrate, one full-collection write after every mutation.
/// There are no partial or delta writes. Implementations can use the local
/// filesystem, process memory, or anything else that can hold a JSON array.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Load the persisted collection, in insertion order.
    ///
    /// # Returns
    /// An empty `Vec` when nothing has been stored yet.
    async fn load_books(&self) -> Result<Vec<BookRecord>>;

    /// Replace the persisted collection with `books`, in order.
    async fn save_books(&self, books: &[BookRecord]) -> Result<()>;
}
