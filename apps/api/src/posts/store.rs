//! Post Store — the full post mapping persisted as one JSON document.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::warn;

use crate::storage::{DocumentStore, StorageError};

/// Sanitized key → raw Markdown content.
pub type PostMap = BTreeMap<String, String>;

const POSTS_DOCUMENT: &str = "posts";

/// Stores every post in a single document, read and written whole.
///
/// There is no locking: upsert is expressed by callers as load → mutate →
/// save, and concurrent writers on the same document can lose an update
/// (last writer wins). Known limitation at this system's scale.
#[derive(Clone)]
pub struct PostStore {
    docs: Arc<dyn DocumentStore>,
}

impl PostStore {
    pub fn new(docs: Arc<dyn DocumentStore>) -> Self {
        Self { docs }
    }

    /// Loads the full mapping. A missing document is an empty mapping; an
    /// unreadable or corrupt one is logged and also treated as empty;
    /// reads never fail.
    pub async fn load(&self) -> PostMap {
        let contents = match self.docs.read(POSTS_DOCUMENT).await {
            Ok(Some(contents)) => contents,
            Ok(None) => return PostMap::new(),
            Err(e) => {
                warn!("Failed to read posts document, treating as empty: {e}");
                return PostMap::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(posts) => posts,
            Err(e) => {
                warn!("Posts document is corrupt, treating as empty: {e}");
                PostMap::new()
            }
        }
    }

    /// Persists the full mapping. Callers inspect the result; by policy a
    /// failed write is logged at the call site and the operation continues
    /// (best-effort persistence, never fatal).
    pub async fn save(&self, posts: &PostMap) -> Result<(), StorageError> {
        let contents =
            serde_json::to_string_pretty(posts).map_err(|e| StorageError::Corrupt {
                name: POSTS_DOCUMENT.to_string(),
                source: e,
            })?;
        self.docs.write(POSTS_DOCUMENT, &contents).await
    }
}
