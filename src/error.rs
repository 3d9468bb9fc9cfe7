//! Typed errors and HTTP mapping.
//!
//! Responses go through two stages: errors that classify to an application
//! `(status, message)` pair are emitted verbatim, everything else becomes a
//! 500 with the generic body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub const MSG_NOT_FOUND: &str = "Resource not found";
pub const MSG_INVALID_PATH: &str = "Invalid path";
pub const MSG_INVALID_REQUEST: &str = "Invalid request";
pub const MSG_INVALID_DATA: &str = "Invalid data";
pub const MSG_PAYLOAD_TOO_LARGE: &str = "Payload too large";
pub const MSG_INTERNAL: &str = "something went wrong";

/// Postgres SQLSTATE codes that map to client errors.
mod sqlstate {
    pub const INVALID_TEXT_REPRESENTATION: &str = "22P02";
    pub const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";
    pub const NOT_NULL_VIOLATION: &str = "23502";
    pub const FOREIGN_KEY_VIOLATION: &str = "23503";
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
    #[error("dotenv: {0}")]
    Dotenv(#[from] dotenvy::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("not found")]
    NotFound,
    #[error("no route for {0}")]
    InvalidPath(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("invalid data: {0}")]
    InvalidData(String),
    #[error("request body over the configured limit")]
    PayloadTooLarge,
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("seed data: {0}")]
    Io(#[from] std::io::Error),
    #[error("seed data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("internal: {0}")]
    Internal(String),
}

impl AppError {
    /// Application-level status and message, or `None` when the error is
    /// unclassified and must fall through to the generic 500.
    pub fn classify(&self) -> Option<(StatusCode, &'static str)> {
        match self {
            AppError::NotFound => Some((StatusCode::NOT_FOUND, MSG_NOT_FOUND)),
            AppError::InvalidPath(_) => Some((StatusCode::NOT_FOUND, MSG_INVALID_PATH)),
            AppError::InvalidRequest(_) => Some((StatusCode::BAD_REQUEST, MSG_INVALID_REQUEST)),
            AppError::InvalidData(_) => Some((StatusCode::BAD_REQUEST, MSG_INVALID_DATA)),
            AppError::PayloadTooLarge => Some((StatusCode::PAYLOAD_TOO_LARGE, MSG_PAYLOAD_TOO_LARGE)),
            AppError::Db(e) => classify_db(e),
            AppError::Config(_) | AppError::Io(_) | AppError::Json(_) | AppError::Internal(_) => None,
        }
    }
}

fn classify_db(e: &sqlx::Error) -> Option<(StatusCode, &'static str)> {
    match e {
        sqlx::Error::RowNotFound => Some((StatusCode::NOT_FOUND, MSG_NOT_FOUND)),
        sqlx::Error::Database(db) => match db.code().as_deref() {
            Some(sqlstate::INVALID_TEXT_REPRESENTATION) | Some(sqlstate::NUMERIC_VALUE_OUT_OF_RANGE) => {
                Some((StatusCode::BAD_REQUEST, MSG_INVALID_REQUEST))
            }
            Some(sqlstate::NOT_NULL_VIOLATION) => Some((StatusCode::BAD_REQUEST, MSG_INVALID_DATA)),
            Some(sqlstate::FOREIGN_KEY_VIOLATION) => Some((StatusCode::NOT_FOUND, MSG_NOT_FOUND)),
            _ => None,
        },
        _ => None,
    }
}

#[derive(Serialize, Debug)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Serialize, Debug)]
pub struct InternalErrorBody {
    pub message: String,
    pub err: String,
}

/// The catch-all 500 response. Shared with the panic handler.
pub fn internal_error_response(err: String) -> Response {
    let body = InternalErrorBody {
        message: MSG_INTERNAL.to_string(),
        err,
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.classify() {
            Some((status, message)) => {
                tracing::warn!(status = status.as_u16(), error = %self, "request rejected");
                let body = MessageBody {
                    message: message.to_string(),
                };
                (status, Json(body)).into_response()
            }
            None => {
                tracing::error!(error = %self, "unhandled error");
                internal_error_response(self.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classified_errors_keep_their_status() {
        assert_eq!(
            AppError::NotFound.classify(),
            Some((StatusCode::NOT_FOUND, "Resource not found"))
        );
        assert_eq!(
            AppError::InvalidPath("/nope".into()).classify(),
            Some((StatusCode::NOT_FOUND, "Invalid path"))
        );
        assert_eq!(
            AppError::InvalidRequest("abc".into()).classify(),
            Some((StatusCode::BAD_REQUEST, "Invalid request"))
        );
        assert_eq!(
            AppError::InvalidData("B4N4N4".into()).classify(),
            Some((StatusCode::BAD_REQUEST, "Invalid data"))
        );
        assert_eq!(
            AppError::PayloadTooLarge.classify(),
            Some((StatusCode::PAYLOAD_TOO_LARGE, "Payload too large"))
        );
    }

    #[test]
    fn row_not_found_is_a_404() {
        let err = AppError::Db(sqlx::Error::RowNotFound);
        assert_eq!(err.classify(), Some((StatusCode::NOT_FOUND, MSG_NOT_FOUND)));
    }

    #[test]
    fn unclassified_errors_fall_through_to_500() {
        assert_eq!(AppError::Internal("boom".into()).classify(), None);
        assert_eq!(AppError::Db(sqlx::Error::PoolTimedOut).classify(), None);
        let resp = AppError::Internal("boom".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn classified_errors_render_message_body() {
        let resp = AppError::InvalidData("x".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
