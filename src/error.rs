//! Typed errors and HTTP mapping.

use crate::response::Envelope;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}' ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Startup and listener failures. All are fatal for the process.
#[derive(Error, Debug)]
pub enum ServeError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("cannot bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },
    #[error("server: {0}")]
    Serve(std::io::Error),
}

/// Failure talking to the relational store. Never fatal for the process.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("database: statement timed out after {0:?}")]
    Timeout(Duration),
}

#[derive(Error, Debug)]
pub enum ApiError {
    /// Caller input missing a required field. `status` is 200 unless strict status mapping is on.
    #[error("{message}")]
    Validation {
        message: &'static str,
        status: StatusCode,
    },
    /// Request body present but unusable (too large, unreadable, malformed form).
    #[error("{message}")]
    Body { message: String, status: StatusCode },
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation { status, .. } => *status,
            ApiError::Body { status, .. } => *status,
            ApiError::Store(e) => {
                tracing::error!(error = %e, "store failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(Envelope::error(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_message_mentions_duration() {
        let e = StoreError::Timeout(Duration::from_secs(3));
        assert_eq!(e.to_string(), "database: statement timed out after 3s");
    }

    #[test]
    fn store_error_maps_to_500() {
        let resp = ApiError::from(StoreError::Timeout(Duration::from_millis(10))).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_keeps_requested_status() {
        let resp = ApiError::Validation {
            message: "nope",
            status: StatusCode::BAD_REQUEST,
        }
        .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn body_error_keeps_rejection_status() {
        let resp = ApiError::Body {
            message: "length limit exceeded".into(),
            status: StatusCode::PAYLOAD_TOO_LARGE,
        }
        .into_response();
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
