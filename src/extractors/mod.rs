//! Request extractors that turn raw input into typed values or an `AppError`.

mod article_id;
mod json_body;

pub use article_id::ArticleId;
pub use json_body::JsonBody;
