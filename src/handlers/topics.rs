//! Topic listing.

use crate::error::AppError;
use crate::response::{ok, TopicsBody};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn get_topics(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let topics = state.store.list_topics().await?;
    Ok(ok(TopicsBody { topics }))
}
