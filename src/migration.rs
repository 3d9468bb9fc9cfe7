//! DDL for the four tables. Creation order follows foreign-key dependencies;
//! dropping runs in reverse.

use crate::error::AppError;
use sqlx::PgConnection;

const CREATE_TABLES: &[(&str, &str)] = &[
    (
        "topics",
        r#"
        CREATE TABLE IF NOT EXISTS topics (
            slug VARCHAR PRIMARY KEY,
            description VARCHAR NOT NULL
        )
        "#,
    ),
    (
        "users",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            username VARCHAR PRIMARY KEY,
            name VARCHAR NOT NULL,
            avatar_url VARCHAR NOT NULL
        )
        "#,
    ),
    (
        "articles",
        r#"
        CREATE TABLE IF NOT EXISTS articles (
            article_id SERIAL PRIMARY KEY,
            title VARCHAR NOT NULL,
            topic VARCHAR NOT NULL REFERENCES topics(slug),
            author VARCHAR NOT NULL REFERENCES users(username),
            body VARCHAR NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            votes INT NOT NULL DEFAULT 0
        )
        "#,
    ),
    (
        "comments",
        r#"
        CREATE TABLE IF NOT EXISTS comments (
            comment_id SERIAL PRIMARY KEY,
            article_id INT NOT NULL REFERENCES articles(article_id) ON DELETE CASCADE,
            author VARCHAR NOT NULL REFERENCES users(username),
            body VARCHAR NOT NULL,
            votes INT NOT NULL DEFAULT 0,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
];

/// Create any missing tables. Idempotent.
pub async fn apply_migrations(conn: &mut PgConnection) -> Result<(), AppError> {
    for &(table, ddl) in CREATE_TABLES {
        tracing::debug!(table = %table, "create table");
        sqlx::query(ddl).execute(&mut *conn).await?;
    }
    Ok(())
}

/// Drop all four tables, dependents first.
pub async fn drop_tables(conn: &mut PgConnection) -> Result<(), AppError> {
    for &(table, _) in CREATE_TABLES.iter().rev() {
        tracing::debug!(table = %table, "drop table");
        sqlx::query(&format!("DROP TABLE IF EXISTS {}", table))
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}
