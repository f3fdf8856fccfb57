//! Error types for the reading-list catalog.

use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{message}")]
    Validation { field: String, message: String },

    #[error("Book already in the list: '{title}' by {author}")]
    Duplicate { title: String, author: String },

    #[error("Book not found: {id}")]
    BookNotFound { id: String },

    #[error("Data conversion failed: {message}")]
    DataConversionError {
        message: String,
        #[source]
        source: Option<eyre::Report>,
    },

    #[error("Storage operation failed: {operation}")]
    StorageOperationFailed {
        operation: String,
        #[source]
        source: Option<eyre::Report>,
    },

    #[error("Storage backend error")]
    BackendError {
        #[source]
        source: Option<eyre::Report>,
    },
}

impl CatalogError {
    /// Build a validation error for a required field that is empty after trimming.
    pub fn required(field: &str, label: &str) -> Self {
        CatalogError::Validation {
            field: field.to_string(),
            message: format!("{label} is required"),
        }
    }

    /// Build a validation error for a field that exceeds its length limit.
    pub fn too_long(field: &str, label: &str, max: usize) -> Self {
        CatalogError::Validation {
            field: field.to_string(),
            message: format!("{label} is too long (max {max} characters)"),
        }
    }
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
