//! Standard response envelope shared by every endpoint.

use crate::model::Center;
use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeType {
    Success,
    Error,
}

/// `data` is only set on list reads, `message` only on writes, deletes and errors.
#[derive(Serialize, Debug)]
pub struct Envelope {
    #[serde(rename = "type")]
    pub kind: EnvelopeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Center>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Envelope {
    pub fn data(data: Vec<Center>) -> Self {
        Envelope {
            kind: EnvelopeType::Success,
            data: Some(data),
            message: None,
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Envelope {
            kind: EnvelopeType::Success,
            data: None,
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Envelope {
            kind: EnvelopeType::Error,
            data: None,
            message: Some(message.into()),
        }
    }
}

pub fn success_many(data: Vec<Center>) -> (StatusCode, Json<Envelope>) {
    (StatusCode::OK, Json(Envelope::data(data)))
}

pub fn success_message(message: &str) -> (StatusCode, Json<Envelope>) {
    (StatusCode::OK, Json(Envelope::message(message)))
}
