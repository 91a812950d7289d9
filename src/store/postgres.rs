use crate::error::StoreError;
use crate::model::{Center, NewCenter, ALL_COLUMNS, CENTERS_TABLE, DATA_COLUMNS, ID_COLUMN};
use crate::store::{CenterStore, PgGateway};
use async_trait::async_trait;

/// `centers` table on PostgreSQL.
#[derive(Clone)]
pub struct PgCenterStore {
    gateway: PgGateway,
}

impl PgCenterStore {
    pub fn new(gateway: PgGateway) -> Self {
        PgCenterStore { gateway }
    }
}

#[async_trait]
impl CenterStore for PgCenterStore {
    async fn list_centers(&self) -> Result<Vec<Center>, StoreError> {
        self.gateway.query_all(CENTERS_TABLE, &ALL_COLUMNS).await
    }

    async fn insert_center(&self, center: &NewCenter) -> Result<i32, StoreError> {
        let values = center.values();
        let fields: Vec<(&str, &str)> = DATA_COLUMNS.iter().copied().zip(values).collect();
        self.gateway
            .insert_returning_id(CENTERS_TABLE, &fields, ID_COLUMN)
            .await
    }

    async fn delete_center(&self, id: &str) -> Result<u64, StoreError> {
        self.gateway.delete_by_id(CENTERS_TABLE, ID_COLUMN, id).await
    }

    async fn delete_all_centers(&self) -> Result<u64, StoreError> {
        self.gateway.delete_all(CENTERS_TABLE).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.gateway.ping().await
    }
}
