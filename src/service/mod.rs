//! Data access: one operation per query shape, behind a trait so the HTTP layer
//! can run against Postgres or an in-memory dataset.

mod memory;
mod postgres;
mod validation;

pub use memory::MemoryNewsStore;
pub use postgres::PgNewsStore;
pub use validation::RequestValidator;

use crate::error::AppError;
use crate::models::{Article, ArticleWithCount, Comment, Topic, User};
use async_trait::async_trait;

/// Operations return `Ok(None)` (or an empty list) when nothing matches; errors are
/// reserved for malformed input, constraint violations and store failures.
#[async_trait]
pub trait NewsStore: Send + Sync {
    /// All topics, storage order.
    async fn list_topics(&self) -> Result<Vec<Topic>, AppError>;

    /// All articles with `comment_count`, newest `created_at` first.
    async fn list_articles(&self) -> Result<Vec<ArticleWithCount>, AppError>;

    async fn get_article_by_id(&self, article_id: i32) -> Result<Option<ArticleWithCount>, AppError>;

    /// Apply `votes = votes + delta` and return the updated row.
    async fn update_article_votes(&self, delta: i32, article_id: i32) -> Result<Option<Article>, AppError>;

    async fn list_users(&self) -> Result<Vec<User>, AppError>;

    /// Comments on one article, most recently inserted first. Empty when the article
    /// has none or does not exist; use `article_exists` to tell the two apart.
    async fn list_comments_by_article_id(&self, article_id: i32) -> Result<Vec<Comment>, AppError>;

    async fn article_exists(&self, article_id: i32) -> Result<bool, AppError>;

    /// Cheap liveness check backing `/ready`.
    async fn ping(&self) -> Result<(), AppError>;
}
