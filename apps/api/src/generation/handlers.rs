//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::generation::generator::{generate_post, GeneratedPost};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub keyword: String,
}

/// POST /api/v1/posts/generate
///
/// Runs the full pipeline synchronously for an arbitrary keyword and upserts
/// the result. Returns the generated content and the derived key.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GeneratedPost>, AppError> {
    let keyword = request.keyword.trim();
    if keyword.is_empty() {
        return Err(AppError::Validation("keyword cannot be empty".to_string()));
    }

    let generated = generate_post(&state, keyword).await?;
    Ok(Json(generated))
}
