//! Config validation: values that parse but cannot work.

use crate::config::AppConfig;
use crate::error::ConfigError;

pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let db = &config.database;
    if db.statement_timeout.is_zero() {
        return Err(ConfigError::Invalid {
            key: "CENTERS_STATEMENT_TIMEOUT_SECS",
            value: "0".into(),
            reason: "must be greater than zero".into(),
        });
    }
    if db.url.is_none() && db.port == 0 {
        return Err(ConfigError::Invalid {
            key: "CENTERS_DB_PORT",
            value: "0".into(),
            reason: "must be a non-zero port".into(),
        });
    }
    // Surfaces a malformed DATABASE_URL at startup instead of on the first request.
    db.connect_options()?;
    Ok(())
}
