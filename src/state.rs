//! Shared application state for all routes.

use crate::store::CenterStore;
use axum::http::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CenterStore>,
    /// When set, validation failures answer 400 instead of 200.
    pub strict_status: bool,
}

impl AppState {
    pub fn new(store: Arc<dyn CenterStore>, strict_status: bool) -> Self {
        AppState {
            store,
            strict_status,
        }
    }

    pub fn validation_status(&self) -> StatusCode {
        if self.strict_status {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::OK
        }
    }
}
