//! HTTP handlers for center CRUD.

pub mod centers;
pub use centers::*;
