//! NC News: a JSON API over topics, articles, users and comments stored in Postgres.

pub mod config;
pub mod error;
pub mod extractors;
pub mod format;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

pub use config::{load_from_env, Settings};
pub use error::{AppError, ConfigError};
pub use migration::{apply_migrations, drop_tables};
pub use routes::{api_routes, app, common_routes};
pub use seed::{seed, SeedData};
pub use service::{MemoryNewsStore, NewsStore, PgNewsStore};
pub use state::AppState;
pub use store::ensure_database_exists;
