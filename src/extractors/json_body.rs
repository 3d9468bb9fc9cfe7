//! JSON body extractor whose rejections go through the application error path.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde_json::Value;

/// Raw JSON body. Missing content type, unparsable JSON and similar failures
/// reject with `InvalidData` (400) instead of axum's plain-text rejections.
/// A body that overruns the size limit while streaming rejects with `PayloadTooLarge` (413).
#[derive(Debug)]
pub struct JsonBody(pub Value);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| {
                if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    AppError::PayloadTooLarge
                } else {
                    AppError::InvalidData(e.body_text())
                }
            })?;
        Ok(JsonBody(value))
    }
}
