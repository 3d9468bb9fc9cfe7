//! `/api` routes. Each method router falls back to "Invalid path" so an
//! unregistered method on a known path is a 404, not a 405.

use crate::handlers::{
    get_article_by_id, get_articles, get_comments_by_article_id, get_topics, get_users, invalid_path,
    patch_article_by_id,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/topics", get(get_topics).fallback(invalid_path))
        .route("/api/articles", get(get_articles).fallback(invalid_path))
        .route(
            "/api/articles/:article_id",
            get(get_article_by_id).patch(patch_article_by_id).fallback(invalid_path),
        )
        .route(
            "/api/articles/:article_id/comments",
            get(get_comments_by_article_id).fallback(invalid_path),
        )
        .route("/api/users", get(get_users).fallback(invalid_path))
        .with_state(state)
}
