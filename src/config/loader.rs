//! Load settings from the environment, after reading `.env.<APP_ENV>` and `.env`.

use crate::config::types::*;
use crate::config::validate;
use crate::error::ConfigError;
use std::collections::HashMap;
use std::net::SocketAddr;

/// Read `.env.<APP_ENV>` then `.env` (missing files are fine; set variables win), and
/// build validated settings from the process environment.
pub fn load_from_env() -> Result<Settings, ConfigError> {
    let environment = std::env::var("APP_ENV").unwrap_or_else(|_| DEFAULT_ENVIRONMENT.into());
    load_dotenv(&format!(".env.{}", environment))?;
    load_dotenv(".env")?;
    let vars: HashMap<String, String> = std::env::vars().collect();
    from_vars(&vars)
}

fn load_dotenv(file: &str) -> Result<(), ConfigError> {
    match dotenvy::from_filename(file) {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded env file");
            Ok(())
        }
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(ConfigError::Dotenv(e)),
    }
}

/// Build settings from an explicit variable map. Used by `load_from_env` and tests.
pub fn from_vars(vars: &HashMap<String, String>) -> Result<Settings, ConfigError> {
    let database_url = vars
        .get("DATABASE_URL")
        .filter(|s| !s.trim().is_empty())
        .cloned()
        .ok_or(ConfigError::Missing("DATABASE_URL"))?;

    let bind_raw = vars.get("BIND_ADDR").map(String::as_str).unwrap_or(DEFAULT_BIND_ADDR);
    let bind_addr = bind_raw.parse::<SocketAddr>().map_err(|e| ConfigError::Invalid {
        key: "BIND_ADDR",
        reason: format!("{}: {}", bind_raw, e),
    })?;

    let max_connections = match vars.get("DB_MAX_CONNECTIONS") {
        Some(v) => v.parse::<u32>().map_err(|_| ConfigError::Invalid {
            key: "DB_MAX_CONNECTIONS",
            reason: format!("not a number: {}", v),
        })?,
        None => DEFAULT_MAX_CONNECTIONS,
    };

    let body_limit_bytes = match vars.get("BODY_LIMIT_BYTES") {
        Some(v) => v.parse::<usize>().map_err(|_| ConfigError::Invalid {
            key: "BODY_LIMIT_BYTES",
            reason: format!("not a number: {}", v),
        })?,
        None => DEFAULT_BODY_LIMIT_BYTES,
    };

    let environment = vars
        .get("APP_ENV")
        .cloned()
        .unwrap_or_else(|| DEFAULT_ENVIRONMENT.into());

    let settings = Settings {
        database_url,
        bind_addr,
        max_connections,
        environment,
        body_limit_bytes,
    };
    validate(&settings)?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let s = from_vars(&vars(&[("DATABASE_URL", "postgres://localhost/nc_news")])).unwrap();
        assert_eq!(s.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(s.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(s.body_limit_bytes, DEFAULT_BODY_LIMIT_BYTES);
        assert_eq!(s.environment, "development");
    }

    #[test]
    fn database_url_is_required() {
        let err = from_vars(&vars(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DATABASE_URL")));
    }

    #[test]
    fn bad_bind_addr_is_rejected() {
        let err = from_vars(&vars(&[
            ("DATABASE_URL", "postgres://localhost/nc_news"),
            ("BIND_ADDR", "not-an-addr"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "BIND_ADDR", .. }));
    }

    #[test]
    fn overrides_are_read() {
        let s = from_vars(&vars(&[
            ("DATABASE_URL", "postgresql://u:p@db:5432/nc_news_test"),
            ("BIND_ADDR", "127.0.0.1:4000"),
            ("DB_MAX_CONNECTIONS", "12"),
            ("APP_ENV", "test"),
        ]))
        .unwrap();
        assert_eq!(s.bind_addr.port(), 4000);
        assert_eq!(s.max_connections, 12);
        assert_eq!(s.environment, "test");
    }
}
