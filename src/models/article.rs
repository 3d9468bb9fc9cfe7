use crate::format::{serialize_count, serialize_timestamp};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored article row, as returned by the vote update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Article {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Utc>,
    pub votes: i32,
}

/// An article read back with the number of comments that reference it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct ArticleWithCount {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    #[serde(serialize_with = "serialize_count")]
    pub comment_count: i64,
}

impl ArticleWithCount {
    pub fn from_article(article: Article, comment_count: i64) -> Self {
        ArticleWithCount {
            article_id: article.article_id,
            title: article.title,
            topic: article.topic,
            author: article.author,
            body: article.body,
            created_at: article.created_at,
            votes: article.votes,
            comment_count,
        }
    }
}

/// Seed record. Ids are assigned by the store in insertion order.
#[derive(Clone, Debug, Deserialize)]
pub struct NewArticle {
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub votes: i32,
}
