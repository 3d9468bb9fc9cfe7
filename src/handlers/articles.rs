//! Article handlers: list, read one, apply a vote delta.

use crate::error::AppError;
use crate::extractors::{ArticleId, JsonBody};
use crate::response::{ok, ArticleBody, ArticlesBody};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn get_articles(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let articles = state.store.list_articles().await?;
    Ok(ok(ArticlesBody { articles }))
}

pub async fn get_article_by_id(
    State(state): State<AppState>,
    ArticleId(article_id): ArticleId,
) -> Result<impl IntoResponse, AppError> {
    let article = state
        .store
        .get_article_by_id(article_id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ok(ArticleBody { article }))
}

/// The only mutating route. Each request applies its delta once; repeats compound.
pub async fn patch_article_by_id(
    State(state): State<AppState>,
    ArticleId(article_id): ArticleId,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let delta = RequestValidator::inc_votes(&body)?;
    let article = state
        .store
        .update_article_votes(delta, article_id)
        .await?
        .ok_or(AppError::NotFound)?;
    tracing::info!(article_id, delta, votes = article.votes, "article votes updated");
    Ok(ok(ArticleBody { article }))
}
