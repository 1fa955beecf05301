use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::posts::store::PostStore;
use crate::reviews::store::ReviewStore;
use crate::seo::SeoProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostStore,
    pub reviews: ReviewStore,
    pub llm: LlmClient,
    /// Pluggable SEO metrics provider. Default: MockSeoProvider.
    pub seo: Arc<dyn SeoProvider>,
    pub config: Config,
}
