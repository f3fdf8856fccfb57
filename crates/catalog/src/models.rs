//! Book record model and creation rules.
//!
//! The persisted wire format keeps the original camelCase field names
//! (`id`, `title`, `author`, `isRead`, `dateAdded`) so existing reading-list
//! files stay readable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::BookId;

/// Maximum accepted title length, after trimming.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum accepted author length, after trimming.
pub const MAX_AUTHOR_LEN: usize = 100;

/// Books the catalog seeds itself with when the store is empty.
pub const SEED_BOOKS: [(&str, &str); 6] = [
    (
        "Lessons Learned in Software Testing",
        "Cem Kaner e James Marcus Bach",
    ),
    ("The Art of Software Testing", "Glenford Myers"),
    (
        "Explore It!: Reduce Risk and Increase Confidence with Exploratory Testing",
        "Elisabeth Hendrickson",
    ),
    ("Agile Testing Condensed", "Lisa Crispin and Janet Gregory"),
    (
        "Análise De Riscos Em Projetos De Teste De Software",
        "Emerson Rios",
    ),
    (
        "Taking Testing Seriously: The Rapid Software Testing Approach",
        "James Bach e Michael Bolton",
    ),
];

/// A single entry in the reading list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    /// Opaque unique id, generated at creation and never mutated.
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub is_read: bool,
    /// Set once at creation, never mutated.
    pub date_added: DateTime<Utc>,
}

impl BookRecord {
    /// Build a fresh record from already-validated title/author.
    ///
    /// Trims both fields, generates a new id, and stamps the current time.
    /// Field validation is the manager's job; this is just construction.
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            id: BookId::new(Uuid::new_v4().to_string()),
            title: title.trim().to_string(),
            author: author.trim().to_string(),
            is_read: false,
            date_added: Utc::now(),
        }
    }

    /// Case-insensitive (title, author) key used for duplicate detection.
    pub fn duplicate_key(&self) -> (String, String) {
        (self.title.to_lowercase(), self.author.to_lowercase())
    }

    /// Whether the lower-cased title or author contains `term` (already
    /// lower-cased) as a substring.
    pub fn matches_search(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(term) || self.author.to_lowercase().contains(term)
    }
}
