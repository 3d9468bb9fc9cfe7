#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use nc_news::{app, AppState, MemoryNewsStore, SeedData};
use serde_json::Value;
use tower::ServiceExt;

pub const BODY_LIMIT: usize = 64 * 1024;

pub fn test_data_dir() -> String {
    format!("{}/data/test-data", env!("CARGO_MANIFEST_DIR"))
}

pub async fn test_data() -> SeedData {
    SeedData::from_dir(test_data_dir()).await.expect("load test data")
}

/// Fresh in-memory state seeded with the bundled test dataset.
pub async fn memory_state() -> AppState {
    let store = MemoryNewsStore::from_seed(&test_data().await).expect("seed memory store");
    AppState::new(store)
}

pub fn router(state: &AppState) -> Router {
    app(state.clone(), BODY_LIMIT)
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into()))
    };
    (status, json)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn patch(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PATCH, uri, Some(body)).await
}
