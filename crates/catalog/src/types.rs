//! Supporting types for the reading-list catalog.

use serde::{Deserialize, Serialize};

/// Unique identifier for a book within the catalog.
///
/// This is a simple string wrapper so different backends can use whatever
/// identification scheme works best for them (UUIDs, integers, etc.).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(pub String);

impl BookId {
    /// Create a new BookId
    pub fn new(id: String) -> Self {
        Self(id)
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for BookId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for BookId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Which slice of the catalog is currently displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    /// Every book, read or not.
    #[default]
    All,
    /// Only books not yet read.
    ToRead,
    /// Only books marked as read.
    Read,
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            View::All => "all",
            View::ToRead => "to-read",
            View::Read => "read",
        };
        write!(f, "{name}")
    }
}

/// Catalog statistics, recomputed from the collection on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total: u64,
    pub read: u64,
    pub to_read: u64,
}

impl CatalogStats {
    /// Create a new empty stats value
    pub fn new() -> Self {
        Self {
            total: 0,
            read: 0,
            to_read: 0,
        }
    }
}

impl Default for CatalogStats {
    fn default() -> Self {
        Self::new()
    }
}
