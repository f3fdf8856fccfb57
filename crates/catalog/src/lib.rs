//! Reading-list catalog for the Shelfmark project.
//!
//! This crate provides the catalog core: book records with creation rules,
//! a stateful [`CatalogManager`] with CRUD operations and derived
//! filter/search views, and a trait-based persistence seam with filesystem
//! and in-memory backends. Rendering and user interaction live in the
//! presentation layer (`shelfmark_cli`), not here.

pub mod backends;
pub mod error;
pub mod manager;
pub mod models;
pub mod traits;
pub mod types;

// Re-export the main interface and types for easy access
pub use backends::{FilesystemStore, MemoryStore};
pub use error::{CatalogError, Result};
pub use manager::CatalogManager;
pub use models::{BookRecord, MAX_AUTHOR_LEN, MAX_TITLE_LEN, SEED_BOOKS};
pub use traits::{CatalogStore, STORAGE_KEY};
pub use types::{BookId, CatalogStats, View};
