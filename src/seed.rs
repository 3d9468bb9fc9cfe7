//! Seed datasets: load from a directory of JSON files and write them into a fresh schema.

use crate::error::AppError;
use crate::migration::{apply_migrations, drop_tables};
use crate::models::{NewArticle, NewComment, Topic, User};
use serde::de::DeserializeOwned;
use sqlx::PgPool;
use std::path::Path;

#[derive(Clone, Debug, Default)]
pub struct SeedData {
    pub topics: Vec<Topic>,
    pub users: Vec<User>,
    /// Inserted in order; the n-th article gets `article_id = n` (1-based).
    pub articles: Vec<NewArticle>,
    pub comments: Vec<NewComment>,
}

impl SeedData {
    /// Read `topics.json`, `users.json`, `articles.json` and `comments.json` from `dir`.
    pub async fn from_dir(dir: impl AsRef<Path>) -> Result<SeedData, AppError> {
        let dir = dir.as_ref();
        Ok(SeedData {
            topics: read_json(&dir.join("topics.json")).await?,
            users: read_json(&dir.join("users.json")).await?,
            articles: read_json(&dir.join("articles.json")).await?,
            comments: read_json(&dir.join("comments.json")).await?,
        })
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, AppError> {
    let raw = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&raw)?)
}

/// Drop and recreate the tables, then insert the dataset. Runs in one transaction,
/// so a failed seed leaves the previous state intact.
pub async fn seed(pool: &PgPool, data: &SeedData) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    drop_tables(&mut *tx).await?;
    apply_migrations(&mut *tx).await?;

    for t in &data.topics {
        sqlx::query("INSERT INTO topics (slug, description) VALUES ($1, $2)")
            .bind(&t.slug)
            .bind(&t.description)
            .execute(&mut *tx)
            .await?;
    }
    for u in &data.users {
        sqlx::query("INSERT INTO users (username, name, avatar_url) VALUES ($1, $2, $3)")
            .bind(&u.username)
            .bind(&u.name)
            .bind(&u.avatar_url)
            .execute(&mut *tx)
            .await?;
    }
    for a in &data.articles {
        sqlx::query(
            "INSERT INTO articles (title, topic, author, body, created_at, votes) VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&a.title)
        .bind(&a.topic)
        .bind(&a.author)
        .bind(&a.body)
        .bind(a.created_at)
        .bind(a.votes)
        .execute(&mut *tx)
        .await?;
    }
    for c in &data.comments {
        sqlx::query(
            "INSERT INTO comments (article_id, author, body, votes, created_at) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(c.article_id)
        .bind(&c.author)
        .bind(&c.body)
        .bind(c.votes)
        .bind(c.created_at)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::info!(
        topics = data.topics.len(),
        users = data.users.len(),
        articles = data.articles.len(),
        comments = data.comments.len(),
        "seeded"
    );
    Ok(())
}
