//! Response envelopes. Every success body is a single-key object naming its payload.

use crate::models::{ArticleWithCount, Comment, Topic, User};
use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct TopicsBody {
    pub topics: Vec<Topic>,
}

#[derive(Serialize)]
pub struct ArticlesBody {
    pub articles: Vec<ArticleWithCount>,
}

#[derive(Serialize)]
pub struct ArticleBody<A> {
    pub article: A,
}

#[derive(Serialize)]
pub struct UsersBody {
    pub users: Vec<User>,
}

#[derive(Serialize)]
pub struct CommentsBody {
    pub comments: Vec<Comment>,
}

pub fn ok<T: Serialize>(body: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(body))
}
