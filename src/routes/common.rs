//! Common routes: health, readiness, version.

use crate::handlers::{health, invalid_path, ready, version};
use crate::state::AppState;
use axum::{routing::get, Router};

/// GET /health, GET /ready (store ping), GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health).fallback(invalid_path))
        .route("/ready", get(ready).fallback(invalid_path))
        .route("/version", get(version).fallback(invalid_path))
        .with_state(state)
}
