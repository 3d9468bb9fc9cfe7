//! In-memory `NewsStore` built from a seed dataset. Enforces the same referential
//! rules the Postgres schema does, so handlers see identical outcomes.

use super::NewsStore;
use crate::error::AppError;
use crate::models::{Article, ArticleWithCount, Comment, Topic, User};
use crate::seed::SeedData;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Tables {
    topics: Vec<Topic>,
    users: Vec<User>,
    articles: Vec<Article>,
    comments: Vec<Comment>,
}

impl Tables {
    fn comment_count(&self, article_id: i32) -> i64 {
        self.comments.iter().filter(|c| c.article_id == article_id).count() as i64
    }

    fn with_count(&self, article: &Article) -> ArticleWithCount {
        ArticleWithCount::from_article(article.clone(), self.comment_count(article.article_id))
    }
}

pub struct MemoryNewsStore {
    tables: RwLock<Tables>,
}

impl MemoryNewsStore {
    /// Load a dataset, assigning `article_id` and `comment_id` from 1 in input order.
    /// Fails with `InvalidData` when a row references a missing topic, user or article.
    pub fn from_seed(data: &SeedData) -> Result<Self, AppError> {
        let slugs: HashSet<&str> = data.topics.iter().map(|t| t.slug.as_str()).collect();
        let usernames: HashSet<&str> = data.users.iter().map(|u| u.username.as_str()).collect();

        let mut tables = Tables {
            topics: data.topics.clone(),
            users: data.users.clone(),
            ..Tables::default()
        };

        for (i, a) in data.articles.iter().enumerate() {
            if !slugs.contains(a.topic.as_str()) {
                return Err(AppError::InvalidData(format!("unknown topic '{}'", a.topic)));
            }
            if !usernames.contains(a.author.as_str()) {
                return Err(AppError::InvalidData(format!("unknown author '{}'", a.author)));
            }
            tables.articles.push(Article {
                article_id: i as i32 + 1,
                title: a.title.clone(),
                topic: a.topic.clone(),
                author: a.author.clone(),
                body: a.body.clone(),
                created_at: a.created_at,
                votes: a.votes,
            });
        }

        let article_count = tables.articles.len() as i32;
        for (i, c) in data.comments.iter().enumerate() {
            if c.article_id < 1 || c.article_id > article_count {
                return Err(AppError::InvalidData(format!("unknown article {}", c.article_id)));
            }
            if !usernames.contains(c.author.as_str()) {
                return Err(AppError::InvalidData(format!("unknown author '{}'", c.author)));
            }
            tables.comments.push(Comment {
                comment_id: i as i32 + 1,
                article_id: c.article_id,
                votes: c.votes,
                created_at: c.created_at,
                body: c.body.clone(),
                author: c.author.clone(),
            });
        }

        Ok(MemoryNewsStore {
            tables: RwLock::new(tables),
        })
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, AppError> {
        self.tables
            .read()
            .map_err(|_| AppError::Internal("memory store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, AppError> {
        self.tables
            .write()
            .map_err(|_| AppError::Internal("memory store lock poisoned".into()))
    }
}

#[async_trait]
impl NewsStore for MemoryNewsStore {
    async fn list_topics(&self) -> Result<Vec<Topic>, AppError> {
        Ok(self.read()?.topics.clone())
    }

    async fn list_articles(&self) -> Result<Vec<ArticleWithCount>, AppError> {
        let tables = self.read()?;
        let mut rows: Vec<ArticleWithCount> = tables.articles.iter().map(|a| tables.with_count(a)).collect();
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.article_id.cmp(&a.article_id))
        });
        Ok(rows)
    }

    async fn get_article_by_id(&self, article_id: i32) -> Result<Option<ArticleWithCount>, AppError> {
        let tables = self.read()?;
        Ok(tables
            .articles
            .iter()
            .find(|a| a.article_id == article_id)
            .map(|a| tables.with_count(a)))
    }

    async fn update_article_votes(&self, delta: i32, article_id: i32) -> Result<Option<Article>, AppError> {
        let mut tables = self.write()?;
        let Some(article) = tables.articles.iter_mut().find(|a| a.article_id == article_id) else {
            return Ok(None);
        };
        article.votes = article
            .votes
            .checked_add(delta)
            .ok_or_else(|| AppError::InvalidRequest(format!("votes out of range after adding {}", delta)))?;
        Ok(Some(article.clone()))
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.read()?.users.clone())
    }

    async fn list_comments_by_article_id(&self, article_id: i32) -> Result<Vec<Comment>, AppError> {
        let tables = self.read()?;
        let mut rows: Vec<Comment> = tables
            .comments
            .iter()
            .filter(|c| c.article_id == article_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.comment_id.cmp(&a.comment_id));
        Ok(rows)
    }

    async fn article_exists(&self, article_id: i32) -> Result<bool, AppError> {
        Ok(self.read()?.articles.iter().any(|a| a.article_id == article_id))
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.read().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewArticle, NewComment};
    use chrono::{TimeZone, Utc};

    fn dataset() -> SeedData {
        SeedData {
            topics: vec![Topic {
                slug: "mitch".into(),
                description: "The man, the Mitch, the legend".into(),
            }],
            users: vec![User {
                username: "butter_bridge".into(),
                name: "jonny".into(),
                avatar_url: "https://example.com/a.jpg".into(),
            }],
            articles: vec![
                NewArticle {
                    title: "older".into(),
                    topic: "mitch".into(),
                    author: "butter_bridge".into(),
                    body: "a".into(),
                    created_at: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
                    votes: 10,
                },
                NewArticle {
                    title: "newer".into(),
                    topic: "mitch".into(),
                    author: "butter_bridge".into(),
                    body: "b".into(),
                    created_at: Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap(),
                    votes: 0,
                },
            ],
            comments: vec![
                NewComment {
                    article_id: 1,
                    author: "butter_bridge".into(),
                    body: "first".into(),
                    votes: 1,
                    created_at: Utc.with_ymd_and_hms(2020, 2, 1, 0, 0, 0).unwrap(),
                },
                NewComment {
                    article_id: 1,
                    author: "butter_bridge".into(),
                    body: "second".into(),
                    votes: 2,
                    created_at: Utc.with_ymd_and_hms(2020, 3, 1, 0, 0, 0).unwrap(),
                },
            ],
        }
    }

    #[tokio::test]
    async fn articles_are_newest_first_with_counts() {
        let store = MemoryNewsStore::from_seed(&dataset()).unwrap();
        let rows = store.list_articles().await.unwrap();
        assert_eq!(rows[0].title, "newer");
        assert_eq!(rows[0].comment_count, 0);
        assert_eq!(rows[1].article_id, 1);
        assert_eq!(rows[1].comment_count, 2);
    }

    #[tokio::test]
    async fn votes_are_relative_and_compound() {
        let store = MemoryNewsStore::from_seed(&dataset()).unwrap();
        let a = store.update_article_votes(5, 1).await.unwrap().unwrap();
        assert_eq!(a.votes, 15);
        let a = store.update_article_votes(-20, 1).await.unwrap().unwrap();
        assert_eq!(a.votes, -5);
        let read = store.get_article_by_id(1).await.unwrap().unwrap();
        assert_eq!(read.votes, -5);
    }

    #[tokio::test]
    async fn missing_article_updates_nothing() {
        let store = MemoryNewsStore::from_seed(&dataset()).unwrap();
        assert!(store.update_article_votes(1, 999).await.unwrap().is_none());
        assert!(store.get_article_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn vote_overflow_is_an_invalid_request() {
        let store = MemoryNewsStore::from_seed(&dataset()).unwrap();
        let err = store.update_article_votes(i32::MAX, 1).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(_)));
        assert_eq!(store.get_article_by_id(1).await.unwrap().unwrap().votes, 10);
    }

    #[tokio::test]
    async fn comments_are_most_recent_id_first() {
        let store = MemoryNewsStore::from_seed(&dataset()).unwrap();
        let rows = store.list_comments_by_article_id(1).await.unwrap();
        let ids: Vec<i32> = rows.iter().map(|c| c.comment_id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert!(store.list_comments_by_article_id(2).await.unwrap().is_empty());
        assert!(store.article_exists(2).await.unwrap());
        assert!(!store.article_exists(3).await.unwrap());
    }

    #[test]
    fn dangling_references_are_rejected() {
        let mut data = dataset();
        data.articles[0].topic = "dogs".into();
        assert!(matches!(MemoryNewsStore::from_seed(&data), Err(AppError::InvalidData(_))));

        let mut data = dataset();
        data.comments[0].article_id = 7;
        assert!(matches!(MemoryNewsStore::from_seed(&data), Err(AppError::InvalidData(_))));
    }
}
