use crate::format::serialize_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Comment {
    pub comment_id: i32,
    #[serde(skip_serializing)]
    pub article_id: i32,
    pub votes: i32,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Utc>,
    pub body: String,
    pub author: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewComment {
    pub article_id: i32,
    pub author: String,
    pub body: String,
    #[serde(default)]
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}
