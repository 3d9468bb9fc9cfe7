//! Error normalization: unclassified store failures and panics become the generic 500,
//! classified database errors keep their client status.

mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use common::{get, patch, router};
use nc_news::models::{Article, ArticleWithCount, Comment, Topic, User};
use nc_news::{AppError, AppState, NewsStore};
use serde_json::json;

enum Failure {
    PoolTimeout,
    Panic,
}

struct BrokenStore(Failure);

impl BrokenStore {
    fn fail<T>(&self) -> Result<T, AppError> {
        match self.0 {
            Failure::PoolTimeout => Err(AppError::Db(sqlx::Error::PoolTimedOut)),
            Failure::Panic => panic!("store exploded"),
        }
    }
}

#[async_trait]
impl NewsStore for BrokenStore {
    async fn list_topics(&self) -> Result<Vec<Topic>, AppError> {
        self.fail()
    }
    async fn list_articles(&self) -> Result<Vec<ArticleWithCount>, AppError> {
        self.fail()
    }
    async fn get_article_by_id(&self, _article_id: i32) -> Result<Option<ArticleWithCount>, AppError> {
        self.fail()
    }
    async fn update_article_votes(&self, _delta: i32, _article_id: i32) -> Result<Option<Article>, AppError> {
        self.fail()
    }
    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.fail()
    }
    async fn list_comments_by_article_id(&self, _article_id: i32) -> Result<Vec<Comment>, AppError> {
        self.fail()
    }
    async fn article_exists(&self, _article_id: i32) -> Result<bool, AppError> {
        self.fail()
    }
    async fn ping(&self) -> Result<(), AppError> {
        self.fail()
    }
}

#[tokio::test]
async fn unclassified_store_error_is_a_500() {
    let state = AppState::new(BrokenStore(Failure::PoolTimeout));
    for uri in ["/api/topics", "/api/articles", "/api/articles/1", "/api/users", "/api/articles/1/comments"] {
        let (status, body) = get(router(&state), uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
        assert_eq!(body["message"], "something went wrong");
        assert!(body["err"].as_str().unwrap().contains("pool timed out"), "{}", body);
    }
}

#[tokio::test]
async fn input_errors_are_classified_before_the_store_is_reached() {
    let state = AppState::new(BrokenStore(Failure::PoolTimeout));
    let (status, body) = get(router(&state), "/api/articles/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Invalid request" }));

    let (status, body) = patch(router(&state), "/api/articles/1", json!({ "B4N4N4": 1 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Invalid data" }));
}

#[tokio::test]
async fn handler_panic_is_a_500_not_a_dropped_connection() {
    let state = AppState::new(BrokenStore(Failure::Panic));
    let (status, body) = get(router(&state), "/api/topics").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "something went wrong");
    assert_eq!(body["err"], "store exploded");
}

#[tokio::test]
async fn unreachable_store_is_not_ready() {
    let state = AppState::new(BrokenStore(Failure::PoolTimeout));
    let (status, body) = get(router(&state), "/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["database"], "unavailable");
    let (status, _) = get(router(&state), "/health").await;
    assert_eq!(status, StatusCode::OK);
}
