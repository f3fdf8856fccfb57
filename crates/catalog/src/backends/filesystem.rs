//! Filesystem-based store implementation.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::{CatalogError, Result};
use crate::models::BookRecord;
use crate::traits::{CatalogStore, STORAGE_KEY};

/// Filesystem-based reading-list store.
///
/// Keeps the whole collection as one pretty-printed JSON array:
///
/// ```text
/// storage_root/
/// +-- reading-list.json
/// ```
///
/// Hydration is lenient: a record that fails to deserialize is skipped with
/// a warning rather than failing the whole load, so one malformed entry
/// cannot take the list hostage.
#[derive(Debug, Clone)]
pub struct FilesystemStore {
    root_path: PathBuf,
}

impl FilesystemStore {
    /// Create a new filesystem store rooted at `root_path`.
    pub fn new<P: AsRef<Path>>(root_path: P) -> Self {
        Self {
            root_path: root_path.as_ref().to_path_buf(),
        }
    }

    /// Initialize the storage directory.
    pub async fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.root_path)
            .await
            .map_err(|e| CatalogError::BackendError {
                source: Some(eyre::eyre!("Failed to create storage directory: {}", e)),
            })?;
        Ok(())
    }

    /// Path of the reading-list file.
    pub fn list_path(&self) -> PathBuf {
        self.root_path.join(format!("{STORAGE_KEY}.json"))
    }
}

#[async_trait]
impl CatalogStore for FilesystemStore {
    async fn load_books(&self) -> Result<Vec<BookRecord>> {
        let path = self.list_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| CatalogError::BackendError {
                source: Some(eyre::eyre!("Failed to read reading-list file: {}", e)),
            })?;

        // The original system resets to an empty list when the stored payload
        // is unreadable, and drops individual malformed entries.
        let raw: Vec<serde_json::Value> = match serde_json::from_str(&content) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!("Discarding unreadable reading-list file: {}", e);
                return Ok(Vec::new());
            }
        };

        let mut books = Vec::with_capacity(raw.len());
        for value in raw {
            match serde_json::from_value::<BookRecord>(value) {
                Ok(book) => books.push(book),
                Err(e) => {
                    tracing::warn!("Skipping malformed book record: {}", e);
                }
            }
        }

        Ok(books)
    }

    async fn save_books(&self, books: &[BookRecord]) -> Result<()> {
        let content = serde_json::to_string_pretty(books).map_err(|e| {
            CatalogError::DataConversionError {
                message: "Failed to serialize reading list".to_string(),
                source: Some(eyre::eyre!("JSON error: {}", e)),
            }
        })?;

        fs::write(&self.list_path(), content)
            .await
            .map_err(|e| CatalogError::BackendError {
                source: Some(eyre::eyre!("Failed to write reading-list file: {}", e)),
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_from_empty_store_returns_no_books() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilesystemStore::new(temp_dir.path());
        store.initialize().await.unwrap();

        let books = store.load_books().await.unwrap();
        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn save_and_load_round_trip_preserves_order_and_fields() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilesystemStore::new(temp_dir.path());
        store.initialize().await.unwrap();

        let mut first = BookRecord::new("The Art of Software Testing", "Glenford Myers");
        first.is_read = true;
        let second = BookRecord::new("Explore It!", "Elisabeth Hendrickson");

        store
            .save_books(&[first.clone(), second.clone()])
            .await
            .unwrap();
        let loaded = store.load_books().await.unwrap();

        assert_eq!(loaded, vec![first, second]);
    }

    #[tokio::test]
    async fn unreadable_file_hydrates_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilesystemStore::new(temp_dir.path());
        store.initialize().await.unwrap();

        std::fs::write(store.list_path(), "not json at all").unwrap();

        let books = store.load_books().await.unwrap();
        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn malformed_records_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilesystemStore::new(temp_dir.path());
        store.initialize().await.unwrap();

        let good = BookRecord::new("Agile Testing Condensed", "Lisa Crispin and Janet Gregory");
        let mut payload = vec![serde_json::to_value(&good).unwrap()];
        payload.push(serde_json::json!({"title": 42}));
        std::fs::write(
            store.list_path(),
            serde_json::to_string(&payload).unwrap(),
        )
        .unwrap();

        let loaded = store.load_books().await.unwrap();
        assert_eq!(loaded, vec![good]);
    }
}
