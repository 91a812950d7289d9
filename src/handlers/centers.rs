//! Center handlers: list, create, delete one, delete all.

use crate::error::ApiError;
use crate::model::CenterForm;
use crate::response::{success_many, success_message, Envelope};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{rejection::FormRejection, Form, Path, Query, State},
    http::StatusCode,
    Json,
};

pub const CENTER_ADDED: &str = "New center added successfully!";
pub const CENTER_DELETED: &str = "center has been deleted successfully!";
pub const ALL_CENTERS_DELETED: &str = "All centers deleted successfully";

type EnvelopeResponse = (StatusCode, Json<Envelope>);

pub async fn list_centers(State(state): State<AppState>) -> Result<EnvelopeResponse, ApiError> {
    tracing::info!("getting all centers");
    let centers = state.store.list_centers().await?;
    tracing::debug!(rows = centers.len(), "centers listed");
    Ok(success_many(centers))
}

/// Fields come from the form body, falling back to the query string per field.
/// A body that is not form-encoded is ignored; any other body failure is returned as is.
pub async fn add_center(
    State(state): State<AppState>,
    query: Option<Query<CenterForm>>,
    body: Result<Form<CenterForm>, FormRejection>,
) -> Result<EnvelopeResponse, ApiError> {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let body = match body {
        Ok(Form(f)) => f,
        Err(FormRejection::InvalidFormContentType(_)) => CenterForm::default(),
        Err(rejection) => {
            tracing::warn!(error = %rejection, "unusable create body");
            return Err(ApiError::Body {
                message: rejection.body_text(),
                status: rejection.status(),
            });
        }
    };
    let center = RequestValidator::new_center(body.or(query)).map_err(|message| ApiError::Validation {
        message,
        status: state.validation_status(),
    })?;

    tracing::info!(
        name = %center.name,
        location = %center.location,
        contact = %center.contact,
        "adding new center"
    );
    let id = state.store.insert_center(&center).await?;
    tracing::info!(center_id = id, "center added");
    Ok(success_message(CENTER_ADDED))
}

/// Deleting an id that matches nothing still succeeds.
pub async fn delete_center(
    State(state): State<AppState>,
    id: Option<Path<String>>,
) -> Result<EnvelopeResponse, ApiError> {
    let id = RequestValidator::center_id(id.map(|Path(id)| id)).map_err(|message| ApiError::Validation {
        message,
        status: state.validation_status(),
    })?;

    tracing::info!(center_id = %id, "deleting center");
    let affected = state.store.delete_center(&id).await?;
    tracing::debug!(affected, "center delete finished");
    Ok(success_message(CENTER_DELETED))
}

pub async fn delete_all_centers(State(state): State<AppState>) -> Result<EnvelopeResponse, ApiError> {
    tracing::info!("deleting all centers");
    let affected = state.store.delete_all_centers().await?;
    tracing::info!(affected, "all centers deleted");
    Ok(success_message(ALL_CENTERS_DELETED))
}

/// Fallback for unknown paths.
pub async fn not_found() -> EnvelopeResponse {
    (StatusCode::NOT_FOUND, Json(Envelope::error("Not found")))
}
