//! `NewsStore` over a Postgres pool. Every statement is parameterized.

use super::NewsStore;
use crate::error::AppError;
use crate::models::{Article, ArticleWithCount, Comment, Topic, User};
use async_trait::async_trait;
use sqlx::PgPool;

const SELECT_TOPICS: &str = "SELECT slug, description FROM topics";

const SELECT_USERS: &str = "SELECT username, name, avatar_url FROM users";

const SELECT_ARTICLES_WITH_COUNT: &str = r#"
    SELECT a.article_id, a.title, a.topic, a.author, a.body, a.created_at, a.votes,
           COUNT(c.comment_id) AS comment_count
      FROM articles a
      LEFT JOIN comments c ON c.article_id = a.article_id
     GROUP BY a.article_id
     ORDER BY a.created_at DESC, a.article_id DESC
"#;

const SELECT_ARTICLE_WITH_COUNT_BY_ID: &str = r#"
    SELECT a.article_id, a.title, a.topic, a.author, a.body, a.created_at, a.votes,
           COUNT(c.comment_id) AS comment_count
      FROM articles a
      LEFT JOIN comments c ON c.article_id = a.article_id
     WHERE a.article_id = $1
     GROUP BY a.article_id
"#;

const UPDATE_ARTICLE_VOTES: &str = r#"
    UPDATE articles
       SET votes = votes + $1
     WHERE article_id = $2
 RETURNING article_id, title, topic, author, body, created_at, votes
"#;

const SELECT_COMMENTS_BY_ARTICLE: &str = r#"
    SELECT comment_id, article_id, votes, created_at, body, author
      FROM comments
     WHERE article_id = $1
     ORDER BY comment_id DESC
"#;

const ARTICLE_EXISTS: &str = "SELECT EXISTS(SELECT 1 FROM articles WHERE article_id = $1)";

#[derive(Clone)]
pub struct PgNewsStore {
    pool: PgPool,
}

impl PgNewsStore {
    pub fn new(pool: PgPool) -> Self {
        PgNewsStore { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl NewsStore for PgNewsStore {
    async fn list_topics(&self) -> Result<Vec<Topic>, AppError> {
        tracing::debug!(sql = %SELECT_TOPICS, "query");
        let rows = sqlx::query_as::<_, Topic>(SELECT_TOPICS)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn list_articles(&self) -> Result<Vec<ArticleWithCount>, AppError> {
        tracing::debug!(sql = %SELECT_ARTICLES_WITH_COUNT, "query");
        let rows = sqlx::query_as::<_, ArticleWithCount>(SELECT_ARTICLES_WITH_COUNT)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_article_by_id(&self, article_id: i32) -> Result<Option<ArticleWithCount>, AppError> {
        tracing::debug!(sql = %SELECT_ARTICLE_WITH_COUNT_BY_ID, article_id, "query");
        let row = sqlx::query_as::<_, ArticleWithCount>(SELECT_ARTICLE_WITH_COUNT_BY_ID)
            .bind(article_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_article_votes(&self, delta: i32, article_id: i32) -> Result<Option<Article>, AppError> {
        tracing::debug!(sql = %UPDATE_ARTICLE_VOTES, delta, article_id, "query");
        let row = sqlx::query_as::<_, Article>(UPDATE_ARTICLE_VOTES)
            .bind(delta)
            .bind(article_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        tracing::debug!(sql = %SELECT_USERS, "query");
        let rows = sqlx::query_as::<_, User>(SELECT_USERS)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn list_comments_by_article_id(&self, article_id: i32) -> Result<Vec<Comment>, AppError> {
        tracing::debug!(sql = %SELECT_COMMENTS_BY_ARTICLE, article_id, "query");
        let rows = sqlx::query_as::<_, Comment>(SELECT_COMMENTS_BY_ARTICLE)
            .bind(article_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn article_exists(&self, article_id: i32) -> Result<bool, AppError> {
        tracing::debug!(sql = %ARTICLE_EXISTS, article_id, "query");
        let (exists,): (bool,) = sqlx::query_as(ARTICLE_EXISTS)
            .bind(article_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn ping(&self) -> Result<(), AppError> {
        crate::store::ping(&self.pool).await
    }
}
