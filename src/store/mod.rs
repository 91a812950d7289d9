//! Persistence for centers: the `CenterStore` seam handlers depend on, and its PostgreSQL backing.

mod gateway;
mod postgres;

pub use gateway::{ConnectionSource, PgGateway};
pub use postgres::PgCenterStore;

use crate::error::StoreError;
use crate::model::{Center, NewCenter};
use async_trait::async_trait;

/// Statement-executing capability behind the route handlers. Implementations may pool or
/// open a connection per call; handlers do not care which.
#[async_trait]
pub trait CenterStore: Send + Sync {
    /// Every center. Any row failing to decode fails the whole call.
    async fn list_centers(&self) -> Result<Vec<Center>, StoreError>;

    /// Insert and return the store-generated id.
    async fn insert_center(&self, center: &NewCenter) -> Result<i32, StoreError>;

    /// Delete by opaque id. Returns affected rows; zero is not an error.
    async fn delete_center(&self, id: &str) -> Result<u64, StoreError>;

    async fn delete_all_centers(&self) -> Result<u64, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}
