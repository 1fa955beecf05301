//! Shared helpers for handler-level tests.

use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::posts::store::PostStore;
use crate::reviews::store::ReviewStore;
use crate::seo::MockSeoProvider;
use crate::state::AppState;
use crate::storage::JsonFileStore;

/// Builds an `AppState` whose stores live under `dir`. The LLM client gets a
/// dummy key; tests never reach the network.
pub fn test_state(dir: &Path) -> AppState {
    let config = Config {
        anthropic_api_key: "test-key".to_string(),
        data_dir: dir.to_path_buf(),
        port: 0,
        rust_log: "info".to_string(),
        scheduler_enabled: false,
        daily_schedule: "0 0 0 * * *".to_string(),
    };

    AppState {
        posts: PostStore::new(Arc::new(JsonFileStore::new(dir))),
        reviews: ReviewStore::new(Arc::new(JsonFileStore::new(dir.join("reviews")))),
        llm: LlmClient::new(config.anthropic_api_key.clone()),
        seo: Arc::new(MockSeoProvider),
        config,
    }
}

/// Upserts one post the way callers do: load → insert → save.
pub async fn seed_post(state: &AppState, key: &str, content: &str) {
    let mut posts = state.posts.load().await;
    posts.insert(key.to_string(), content.to_string());
    state.posts.save(&posts).await.unwrap();
}
