//! Axum route handlers for listing, viewing, and deleting posts.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::warn;

use crate::errors::AppError;
use crate::keywords::humanize;
use crate::markdown::{self, SourceLink};
use crate::posts::store::PostMap;
use crate::reviews::store::Review;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PostSummary {
    pub key: String,
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct PostDetailResponse {
    pub key: String,
    pub title: String,
    /// Post body rendered to HTML, Sources section removed.
    pub html: String,
    /// Post body as Markdown, Sources section removed.
    pub markdown: String,
    pub sources: Vec<SourceLink>,
    pub reviews: Vec<Review>,
}

/// Display title for a post: the extracted heading, or the humanized key
/// when extraction comes back with the sentinel.
fn display_title(key: &str, content: &str) -> String {
    let title = markdown::extract_title(content);
    if title == markdown::UNTITLED_POST {
        humanize(key)
    } else {
        title
    }
}

/// GET /api/v1/posts
///
/// Lists every stored post as (key, derived title).
pub async fn handle_list_posts(State(state): State<AppState>) -> Json<Vec<PostSummary>> {
    let posts = state.posts.load().await;
    let summaries = posts
        .iter()
        .map(|(key, content)| PostSummary {
            key: key.clone(),
            title: display_title(key, content),
        })
        .collect();
    Json(summaries)
}

/// GET /api/v1/posts/:key
///
/// Returns the processed post: body with the Sources span removed (as both
/// Markdown and rendered HTML), the extracted sources, and its reviews.
pub async fn handle_view_post(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<PostDetailResponse>, AppError> {
    let posts = state.posts.load().await;
    let content = posts
        .get(&key)
        .ok_or_else(|| AppError::NotFound(format!("Post '{key}' not found")))?;

    let processed = markdown::process(content);
    let title = if processed.title == markdown::UNTITLED_POST {
        humanize(&key)
    } else {
        processed.title
    };
    let html = comrak::markdown_to_html(&processed.body, &comrak::Options::default());
    let reviews = state.reviews.load(&key).await;

    Ok(Json(PostDetailResponse {
        key,
        title,
        html,
        markdown: processed.body,
        sources: processed.sources,
        reviews,
    }))
}

/// DELETE /api/v1/posts/:key
///
/// Removes one post and its review document (no orphaned reviews).
pub async fn handle_delete_post(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut posts = state.posts.load().await;
    if posts.remove(&key).is_none() {
        return Err(AppError::NotFound(format!("Post '{key}' not found")));
    }

    if let Err(e) = state.posts.save(&posts).await {
        warn!("Failed to persist deletion of post '{key}': {e}");
    }
    if let Err(e) = state.reviews.remove(&key).await {
        warn!("Failed to delete reviews for post '{key}': {e}");
    }

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/posts
///
/// Removes every post and every review document.
pub async fn handle_delete_all_posts(State(state): State<AppState>) -> StatusCode {
    if let Err(e) = state.posts.save(&PostMap::new()).await {
        warn!("Failed to persist deletion of all posts: {e}");
    }
    if let Err(e) = state.reviews.remove_all().await {
        warn!("Failed to delete review documents: {e}");
    }
    StatusCode::NO_CONTENT
}
