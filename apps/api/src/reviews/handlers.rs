//! Axum route handlers for the Review API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::warn;

use crate::errors::AppError;
use crate::reviews::store::Review;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SubmitReviewRequest {
    pub name: String,
    pub review: String,
}

/// GET /api/v1/posts/:key/reviews
///
/// Returns the ordered review list for one post.
pub async fn handle_list_reviews(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<Vec<Review>>, AppError> {
    ensure_post_exists(&state, &key).await?;
    Ok(Json(state.reviews.load(&key).await))
}

/// POST /api/v1/posts/:key/reviews
///
/// Appends a review with a server-generated timestamp. Both fields are
/// required non-empty; a rejected submission leaves the stored sequence
/// unchanged.
pub async fn handle_submit_review(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(request): Json<SubmitReviewRequest>,
) -> Result<(StatusCode, Json<Review>), AppError> {
    let name = request.name.trim();
    let text = request.review.trim();
    if name.is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }
    if text.is_empty() {
        return Err(AppError::Validation("review cannot be empty".to_string()));
    }

    ensure_post_exists(&state, &key).await?;

    let review = Review::new(name, text);
    let mut reviews = state.reviews.load(&key).await;
    reviews.push(review.clone());
    if let Err(e) = state.reviews.save(&key, &reviews).await {
        warn!("Failed to persist review for post '{key}': {e}");
    }

    Ok((StatusCode::CREATED, Json(review)))
}

/// Reviews belong to exactly one post; refusing unknown keys here is what
/// keeps review documents from outliving or preceding their post.
async fn ensure_post_exists(state: &AppState, key: &str) -> Result<(), AppError> {
    if state.posts.load().await.contains_key(key) {
        Ok(())
    } else {
        Err(AppError::NotFound(format!("Post '{key}' not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{seed_post, test_state};

    fn request(name: &str, review: &str) -> SubmitReviewRequest {
        SubmitReviewRequest {
            name: name.to_string(),
            review: review.to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_review_with_empty_name_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());
        seed_post(&state, "key", "# Post").await;

        let err = handle_submit_review(
            State(state.clone()),
            Path("key".to_string()),
            Json(request("   ", "fine review")),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert!(state.reviews.load("key").await.is_empty());
    }

    #[tokio::test]
    async fn test_submit_review_with_empty_text_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());
        seed_post(&state, "key", "# Post").await;

        let err = handle_submit_review(
            State(state.clone()),
            Path("key".to_string()),
            Json(request("Ada", "")),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert!(state.reviews.load("key").await.is_empty());
    }

    #[tokio::test]
    async fn test_submit_review_for_unknown_key_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());

        let err = handle_submit_review(
            State(state.clone()),
            Path("missing".to_string()),
            Json(request("Ada", "text")),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert!(state.reviews.load("missing").await.is_empty());
    }

    #[tokio::test]
    async fn test_reviews_appear_in_submission_order() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());
        seed_post(&state, "key", "# Post").await;

        handle_submit_review(
            State(state.clone()),
            Path("key".to_string()),
            Json(request("First", "one")),
        )
        .await
        .unwrap();
        handle_submit_review(
            State(state.clone()),
            Path("key".to_string()),
            Json(request("Second", "two")),
        )
        .await
        .unwrap();

        let Json(reviews) = handle_list_reviews(State(state), Path("key".to_string()))
            .await
            .unwrap();

        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].name, "First");
        assert_eq!(reviews[1].name, "Second");
    }

    #[tokio::test]
    async fn test_submit_trims_fields_before_storing() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());
        seed_post(&state, "key", "# Post").await;

        let (status, Json(review)) = handle_submit_review(
            State(state.clone()),
            Path("key".to_string()),
            Json(request("  Ada  ", "  loved it  ")),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(review.name, "Ada");
        assert_eq!(review.review, "loved it");
    }

    #[tokio::test]
    async fn test_list_reviews_for_unknown_key_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());

        let err = handle_list_reviews(State(state), Path("missing".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
