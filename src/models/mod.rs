//! Row types for the four tables and the shapes the API returns.

pub mod article;
pub mod comment;
pub mod topic;
pub mod user;

pub use article::{Article, ArticleWithCount, NewArticle};
pub use comment::{Comment, NewComment};
pub use topic::Topic;
pub use user::User;
