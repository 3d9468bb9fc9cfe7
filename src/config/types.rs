//! Runtime settings for the server and the store.

use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:9090";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;
pub const DEFAULT_ENVIRONMENT: &str = "development";

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    /// Selects which `.env.<environment>` file is read (`development`, `test`, `production`).
    pub environment: String,
    pub body_limit_bytes: usize,
}
