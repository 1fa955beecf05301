mod config;
mod errors;
mod generation;
mod keywords;
mod llm_client;
mod markdown;
mod posts;
mod reviews;
mod routes;
mod scheduler;
mod seo;
mod state;
mod storage;
#[cfg(test)]
mod test_support;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::posts::store::PostStore;
use crate::reviews::store::ReviewStore;
use crate::routes::build_router;
use crate::scheduler::Scheduler;
use crate::seo::MockSeoProvider;
use crate::state::AppState;
use crate::storage::JsonFileStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Postsmith API v{}", env!("CARGO_PKG_VERSION"));

    // Flat-document stores: posts.json plus one reviews/<key>.json per post
    let posts = PostStore::new(Arc::new(JsonFileStore::new(config.data_dir.clone())));
    let reviews = ReviewStore::new(Arc::new(JsonFileStore::new(config.data_dir.join("reviews"))));
    info!("Document stores rooted at {}", config.data_dir.display());

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Initialize SEO provider (mock; swap for a real API client here)
    let seo = Arc::new(MockSeoProvider);

    // Build app state
    let state = AppState {
        posts,
        reviews,
        llm,
        seo,
        config: config.clone(),
    };

    // Daily generation job; the scheduler handle must outlive the server
    let _scheduler = if config.scheduler_enabled {
        let scheduler = Scheduler::new().await?;
        scheduler
            .add_daily_generation(&config.daily_schedule, state.clone())
            .await?;
        scheduler.start().await?;
        Some(scheduler)
    } else {
        info!("Scheduler disabled");
        None
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
