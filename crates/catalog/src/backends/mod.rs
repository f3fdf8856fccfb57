//! Store implementations for the reading-list catalog.

pub mod filesystem;
pub mod memory;

// Re-export the backends for convenience
pub use filesystem::FilesystemStore;
pub use memory::MemoryStore;
