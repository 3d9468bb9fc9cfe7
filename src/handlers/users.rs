//! User listing.

use crate::error::AppError;
use crate::response::{ok, UsersBody};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = state.store.list_users().await?;
    Ok(ok(UsersBody { users }))
}
