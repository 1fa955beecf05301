//! Review Store — one ordered review list per post key, each its own document.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::storage::{DocumentStore, StorageError};

/// Second-precision UTC format stamped onto every review at creation.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A reader-submitted review. Append-only: insertion order is chronological
/// order, and individual reviews are never edited or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub name: String,
    pub review: String,
    pub timestamp: String,
}

impl Review {
    /// Builds a review stamped with the current time.
    pub fn new(name: &str, review: &str) -> Self {
        Self {
            name: name.to_string(),
            review: review.to_string(),
            timestamp: Utc::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// Same best-effort semantics as the post store: missing document → empty
/// list, corrupt document → logged and empty, writes return a typed result
/// the caller inspects. Appending is load → push → save, with the same
/// unlocked read-modify-write race.
#[derive(Clone)]
pub struct ReviewStore {
    docs: Arc<dyn DocumentStore>,
}

impl ReviewStore {
    pub fn new(docs: Arc<dyn DocumentStore>) -> Self {
        Self { docs }
    }

    /// Loads the ordered review list for a key. Never fails.
    pub async fn load(&self, key: &str) -> Vec<Review> {
        let contents = match self.docs.read(key).await {
            Ok(Some(contents)) => contents,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read reviews for '{key}', treating as empty: {e}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(reviews) => reviews,
            Err(e) => {
                warn!("Review document for '{key}' is corrupt, treating as empty: {e}");
                Vec::new()
            }
        }
    }

    /// Persists the full review list for a key.
    pub async fn save(&self, key: &str, reviews: &[Review]) -> Result<(), StorageError> {
        let contents = serde_json::to_string_pretty(reviews).map_err(|e| StorageError::Corrupt {
            name: key.to_string(),
            source: e,
        })?;
        self.docs.write(key, &contents).await
    }

    /// Removes the review document for a key. Returns whether one existed.
    pub async fn remove(&self, key: &str) -> Result<bool, StorageError> {
        self.docs.delete(key).await
    }

    /// Removes every review document.
    pub async fn remove_all(&self) -> Result<(), StorageError> {
        for key in self.docs.list().await? {
            self.docs.delete(&key).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonFileStore;
    use chrono::NaiveDateTime;

    fn store(dir: &tempfile::TempDir) -> ReviewStore {
        ReviewStore::new(Arc::new(JsonFileStore::new(dir.path())))
    }

    #[test]
    fn test_review_new_stamps_fixed_format() {
        let review = Review::new("Ada", "Great post");
        assert!(NaiveDateTime::parse_from_str(&review.timestamp, TIMESTAMP_FORMAT).is_ok());
    }

    #[tokio::test]
    async fn test_load_missing_key_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(store(&dir).load("absent").await.is_empty());
    }

    #[tokio::test]
    async fn test_append_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        let mut reviews = store.load("key").await;
        reviews.push(Review::new("First", "one"));
        store.save("key", &reviews).await.unwrap();

        let mut reviews = store.load("key").await;
        reviews.push(Review::new("Second", "two"));
        store.save("key", &reviews).await.unwrap();

        let loaded = store.load("key").await;
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].name, "First");
        assert_eq!(loaded[1].name, "Second");
    }

    #[tokio::test]
    async fn test_remove_deletes_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        store.save("key", &[Review::new("Ada", "text")]).await.unwrap();
        assert!(store.remove("key").await.unwrap());
        assert!(store.load("key").await.is_empty());
        assert!(!store.remove("key").await.unwrap());
    }

    #[tokio::test]
    async fn test_remove_all_clears_every_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        store.save("one", &[Review::new("A", "a")]).await.unwrap();
        store.save("two", &[Review::new("B", "b")]).await.unwrap();
        store.remove_all().await.unwrap();

        assert!(store.load("one").await.is_empty());
        assert!(store.load("two").await.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_document_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let docs = JsonFileStore::new(dir.path());
        use crate::storage::DocumentStore;
        docs.write("key", "[ not json").await.unwrap();

        assert!(store(&dir).load("key").await.is_empty());
    }
}
