//! Route table and middleware.

mod centers;
mod common;

pub use centers::center_routes;
pub use common::common_routes;

use crate::handlers::not_found;
use crate::state::AppState;
use axum::Router;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Form bodies are three short strings; anything larger is rejected before parsing.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(center_routes(state))
        .fallback(not_found)
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
}
