//! Extract and parse the `:article_id` path segment.

use crate::error::AppError;
use crate::service::RequestValidator;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// A well-formed article id. Malformed segments reject with `InvalidRequest` (400).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArticleId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for ArticleId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::InvalidRequest(e.body_text()))?;
        RequestValidator::article_id(&raw).map(ArticleId)
    }
}
