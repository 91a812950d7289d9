//! Runtime configuration, loaded once at startup and passed by reference.

use crate::error::ConfigError;
use sqlx::postgres::PgConnectOptions;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

#[derive(Clone)]
pub struct DatabaseConfig {
    /// When set, overrides the individual connection parts.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    /// 0 opens a fresh connection for every store call.
    pub pool_size: u32,
    pub statement_timeout: Duration,
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        match &self.url {
            Some(url) => PgConnectOptions::from_str(url).map_err(|e| ConfigError::Invalid {
                key: "DATABASE_URL",
                value: "<redacted>".into(),
                reason: e.to_string(),
            }),
            None => Ok(PgConnectOptions::new()
                .host(&self.host)
                .port(self.port)
                .username(&self.user)
                .password(&self.password)
                .database(&self.name)),
        }
    }
}

// Hand-written so the password never lands in logs.
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("name", &self.name)
            .field("pool_size", &self.pool_size)
            .field("statement_timeout", &self.statement_timeout)
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Map validation failures to 400 instead of the wire-compatible 200.
    pub strict_status: bool,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}
