//! Route tables and the assembled application router.

mod api;
mod common;

pub use api::api_routes;
pub use common::common_routes;

use crate::error::{internal_error_response, AppError};
use crate::handlers::invalid_path;
use crate::state::AppState;
use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use std::any::Any;
use tower_http::{catch_panic::CatchPanicLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Full application: common + API routes, the "Invalid path" fallback, and the
/// panic, body-limit and tracing layers. Body-limit rejections are rewritten to
/// the JSON error body.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(state))
        .fallback(invalid_path)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(RequestBodyLimitLayer::new(body_limit_bytes))
        .layer(middleware::from_fn(json_payload_too_large))
        .layer(TraceLayer::new_for_http())
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    tracing::error!(panic = %detail, "handler panicked");
    internal_error_response(detail)
}

/// `RequestBodyLimitLayer` answers an oversized `Content-Length` with a plain-text 413.
async fn json_payload_too_large(req: Request, next: Next) -> Response {
    let resp = next.run(req).await;
    if resp.status() != StatusCode::PAYLOAD_TOO_LARGE {
        return resp;
    }
    let is_json = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));
    if is_json {
        resp
    } else {
        AppError::PayloadTooLarge.into_response()
    }
}
