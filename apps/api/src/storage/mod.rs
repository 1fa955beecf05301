//! Flat-document persistence.
//!
//! Everything this service stores lives in named JSON documents behind the
//! [`DocumentStore`] trait. The single in-process implementation is
//! [`JsonFileStore`]; the trait is the seam where a real key-value store
//! could be swapped in without touching callers.

use async_trait::async_trait;
use thiserror::Error;

pub mod json_file;

pub use json_file::JsonFileStore;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on document '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("document '{name}' is not valid JSON: {source}")]
    Corrupt {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Whole-document storage. No partial writes, no row-level access: callers
/// read a document, mutate it in memory, and write it back. Concurrent
/// read-modify-write sequences on the same document can lose an update;
/// last writer wins.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns the raw contents of a document, or `None` if it does not exist.
    async fn read(&self, name: &str) -> Result<Option<String>, StorageError>;

    /// Replaces a document atomically from the reader's point of view.
    async fn write(&self, name: &str, contents: &str) -> Result<(), StorageError>;

    /// Removes a document. Returns whether it existed.
    async fn delete(&self, name: &str) -> Result<bool, StorageError>;

    /// Names of all documents currently present.
    async fn list(&self) -> Result<Vec<String>, StorageError>;
}
