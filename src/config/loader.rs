//! Load `AppConfig` from environment variables.

use crate::config::types::{AppConfig, DatabaseConfig, ServerConfig};
use crate::config::validate;
use crate::error::ConfigError;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8090";
pub const DEFAULT_POOL_SIZE: u32 = 5;
pub const DEFAULT_STATEMENT_TIMEOUT_SECS: u64 = 30;

/// Read configuration from the process environment. Call `dotenvy::dotenv()` first to honor `.env`.
pub fn from_env() -> Result<AppConfig, ConfigError> {
    from_lookup(|key| std::env::var(key).ok())
}

/// Build configuration from an arbitrary key lookup; empty values count as unset.
pub fn from_lookup<F>(get: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let database = DatabaseConfig {
        url: get("DATABASE_URL"),
        host: get("CENTERS_DB_HOST").unwrap_or_else(|| "localhost".into()),
        port: parse_or(&get, "CENTERS_DB_PORT", 5432)?,
        user: get("CENTERS_DB_USER").unwrap_or_else(|| "postgres".into()),
        password: get("CENTERS_DB_PASSWORD").unwrap_or_else(|| "postgres".into()),
        name: get("CENTERS_DB_NAME").unwrap_or_else(|| "mydata".into()),
        pool_size: parse_or(&get, "CENTERS_DB_POOL_SIZE", DEFAULT_POOL_SIZE)?,
        statement_timeout: Duration::from_secs(parse_or(
            &get,
            "CENTERS_STATEMENT_TIMEOUT_SECS",
            DEFAULT_STATEMENT_TIMEOUT_SECS,
        )?),
    };
    let server = ServerConfig {
        bind_addr: match get("CENTERS_BIND_ADDR") {
            Some(raw) => parse_value("CENTERS_BIND_ADDR", &raw)?,
            None => parse_value("CENTERS_BIND_ADDR", DEFAULT_BIND_ADDR)?,
        },
        strict_status: match get("CENTERS_STRICT_STATUS") {
            Some(raw) => parse_bool("CENTERS_STRICT_STATUS", &raw)?,
            None => false,
        },
    };

    let config = AppConfig { database, server };
    validate(&config)?;
    Ok(config)
}

fn parse_or<T, G>(get: &G, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => parse_value(key, &raw),
        None => Ok(default),
    }
}

fn parse_value<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: raw.to_string(),
            reason: "expected true or false".into(),
        }),
    }
}
