//! centers-api: CRUD over service centers, stored in PostgreSQL, served as JSON envelopes.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod server;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{from_env, from_lookup, AppConfig};
pub use error::{ApiError, ConfigError, ServeError, StoreError};
pub use model::{Center, CenterForm, NewCenter};
pub use response::Envelope;
pub use routes::app;
pub use state::AppState;
pub use store::{CenterStore, PgCenterStore, PgGateway};
