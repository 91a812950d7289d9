//! Request validation shared by the handlers.

mod validation;
pub use validation::{RequestValidator, MISSING_FIELD, MISSING_ID};
