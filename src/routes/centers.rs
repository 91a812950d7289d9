//! Center CRUD routes. `/delcenter` and `/delcenter/` exist only so a missing id gets the
//! validation envelope instead of a bare 404.

use crate::handlers::centers::{add_center, delete_all_centers, delete_center, list_centers};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn center_routes(state: AppState) -> Router {
    Router::new()
        .route("/centers", get(list_centers))
        .route("/addcenters", post(add_center))
        .route("/delcenter/:id", delete(delete_center))
        .route("/delcenter/", delete(delete_center))
        .route("/delcenter", delete(delete_center))
        .route("/delcenters", delete(delete_all_centers))
        .with_state(state)
}
