//! Comments for a single article.

use crate::error::AppError;
use crate::extractors::ArticleId;
use crate::response::{ok, CommentsBody};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn get_comments_by_article_id(
    State(state): State<AppState>,
    ArticleId(article_id): ArticleId,
) -> Result<impl IntoResponse, AppError> {
    let comments = state.store.list_comments_by_article_id(article_id).await?;
    // An empty list is only a 200 when the article itself exists.
    if comments.is_empty() && !state.store.article_exists(article_id).await? {
        return Err(AppError::NotFound);
    }
    Ok(ok(CommentsBody { comments }))
}
