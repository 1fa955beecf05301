pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers::handle_generate;
use crate::posts::handlers::{
    handle_delete_all_posts, handle_delete_post, handle_list_posts, handle_view_post,
};
use crate::reviews::handlers::{handle_list_reviews, handle_submit_review};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/posts",
            get(handle_list_posts).delete(handle_delete_all_posts),
        )
        .route("/api/v1/posts/generate", post(handle_generate))
        .route(
            "/api/v1/posts/:key",
            get(handle_view_post).delete(handle_delete_post),
        )
        .route(
            "/api/v1/posts/:key/reviews",
            get(handle_list_reviews).post(handle_submit_review),
        )
        .with_state(state)
}
