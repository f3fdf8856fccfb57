//! In-process store implementation, used by tests and embedders that do not
//! need persistence across sessions.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::models::BookRecord;
use crate::traits::CatalogStore;

/// In-memory reading-list store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    books: RwLock<Vec<BookRecord>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `books`.
    pub fn with_books(books: Vec<BookRecord>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn load_books(&self) -> Result<Vec<BookRecord>> {
        Ok(self.books.read().await.clone())
    }

    async fn save_books(&self, books: &[BookRecord]) -> Result<()> {
        *self.books.write().await = books.to_vec();
        Ok(())
    }
}
