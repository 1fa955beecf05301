//! Blog post generation — orchestrates the full pipeline.
//!
//! Flow: fetch SEO metrics → build prompt → LLM generate → sanitize keyword →
//!       upsert into the post store → return response.
//!
//! A failed metrics fetch or LLM call aborts the attempt before any store
//! mutation, so a failed generation never replaces an existing post.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::generation::prompts::{build_blog_prompt, BLOG_SYSTEM};
use crate::keywords::sanitize;
use crate::seo::SeoMetrics;
use crate::state::AppState;

/// Result of one generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPost {
    pub key: String,
    pub keyword: String,
    pub seo_metrics: SeoMetrics,
    pub content: String,
}

/// Runs the full generation pipeline for one keyword and upserts the result.
///
/// The upsert is load → insert → save on the whole post mapping; a write
/// failure is logged and the generated content is still returned
/// (best-effort persistence).
pub async fn generate_post(state: &AppState, keyword: &str) -> Result<GeneratedPost, AppError> {
    info!("Generating blog post for keyword '{keyword}'");

    let seo_metrics = state.seo.fetch(keyword).await?;
    debug!(
        "SEO metrics for '{keyword}': volume={}, difficulty={}, cpc=${:.2}",
        seo_metrics.search_volume, seo_metrics.keyword_difficulty, seo_metrics.avg_cpc
    );

    let prompt = build_blog_prompt(keyword, &seo_metrics);
    let content = state
        .llm
        .call_markdown(&prompt, BLOG_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Blog generation for '{keyword}' failed: {e}")))?;

    let key = sanitize(keyword);
    let mut posts = state.posts.load().await;
    posts.insert(key.clone(), content.clone());
    if let Err(e) = state.posts.save(&posts).await {
        warn!("Failed to persist generated post '{key}': {e}");
    }

    info!("Generated post stored under key '{key}'");

    Ok(GeneratedPost {
        key,
        keyword: keyword.to_string(),
        seo_metrics,
        content,
    })
}
