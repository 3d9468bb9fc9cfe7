//! HTTP handlers: extract input, call the store, shape the JSON response.

pub mod articles;
pub mod comments;
pub mod common;
pub mod topics;
pub mod users;

pub use articles::*;
pub use comments::*;
pub use common::*;
pub use topics::*;
pub use users::*;
