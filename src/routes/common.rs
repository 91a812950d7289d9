//! Common routes: health, readiness, version.

use crate::error::StoreError;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

/// Readiness mirrors the result of `CenterStore::ping`.
#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    database: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<Result<(), StoreError>> for ReadyBody {
    fn from(ping: Result<(), StoreError>) -> Self {
        match ping {
            Ok(()) => ReadyBody {
                status: "ok",
                database: "ok",
                error: None,
            },
            Err(e) => ReadyBody {
                status: "degraded",
                database: "unavailable",
                error: Some(e.to_string()),
            },
        }
    }
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyBody>) {
    let ping = state.store.ping().await;
    let status = match &ping {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    };
    (status, Json(ReadyBody::from(ping)))
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /health, GET /ready (store ping), GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
