//! Connection acquisition and parameterized statement execution against PostgreSQL.

use crate::config::DatabaseConfig;
use crate::error::{ConfigError, StoreError};
use crate::sql::{self, QueryBuf};
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgRow};
use sqlx::{ConnectOptions, Connection, FromRow, PgConnection, PgPool, Postgres};
use std::future::Future;
use std::ops::{Deref, DerefMut};
use std::time::Duration;

/// Where connections come from.
#[derive(Clone)]
pub enum ConnectionSource {
    /// Lazily connected pool; startup succeeds even if the store is down.
    Pool(PgPool),
    /// A fresh connection for every call, closed afterwards.
    PerRequest(PgConnectOptions),
}

enum Conn {
    Pooled(PoolConnection<Postgres>),
    Fresh(PgConnection),
}

impl Conn {
    async fn release(self) {
        if let Conn::Fresh(c) = self {
            if let Err(e) = c.close().await {
                tracing::debug!(error = %e, "closing connection");
            }
        }
    }
}

impl Deref for Conn {
    type Target = PgConnection;

    fn deref(&self) -> &PgConnection {
        match self {
            Conn::Pooled(c) => &**c,
            Conn::Fresh(c) => c,
        }
    }
}

impl DerefMut for Conn {
    fn deref_mut(&mut self) -> &mut PgConnection {
        match self {
            Conn::Pooled(c) => &mut **c,
            Conn::Fresh(c) => c,
        }
    }
}

#[derive(Clone)]
pub struct PgGateway {
    source: ConnectionSource,
    timeout: Duration,
}

impl PgGateway {
    /// Pool size 0 selects connection-per-call. Never touches the network.
    pub fn new(config: &DatabaseConfig) -> Result<Self, ConfigError> {
        let opts = config.connect_options()?;
        let source = if config.pool_size == 0 {
            ConnectionSource::PerRequest(opts)
        } else {
            ConnectionSource::Pool(
                PgPoolOptions::new()
                    .max_connections(config.pool_size)
                    .acquire_timeout(config.statement_timeout)
                    .connect_lazy_with(opts),
            )
        };
        Ok(Self::with_source(source, config.statement_timeout))
    }

    pub fn with_source(source: ConnectionSource, timeout: Duration) -> Self {
        PgGateway { source, timeout }
    }

    async fn acquire(&self) -> Result<Conn, StoreError> {
        Ok(match &self.source {
            ConnectionSource::Pool(pool) => Conn::Pooled(pool.acquire().await?),
            ConnectionSource::PerRequest(opts) => Conn::Fresh(opts.connect().await?),
        })
    }

    async fn bounded<T, F>(&self, fut: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        tokio::time::timeout(self.timeout, fut)
            .await
            .map_err(|_| StoreError::Timeout(self.timeout))?
    }

    /// SELECT `columns` from every row of `table`, decoding each row as `T`.
    pub async fn query_all<T>(&self, table: &str, columns: &[&str]) -> Result<Vec<T>, StoreError>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let q = sql::select_all(table, columns);
        self.bounded(async {
            tracing::debug!(sql = %q.sql, "query");
            let mut conn = self.acquire().await?;
            let rows = sqlx::query_as::<_, T>(&q.sql).fetch_all(&mut *conn).await;
            conn.release().await;
            Ok::<_, StoreError>(rows?)
        })
        .await
    }

    /// INSERT one row and return the generated integer key.
    pub async fn insert_returning_id(
        &self,
        table: &str,
        fields: &[(&str, &str)],
        id_column: &str,
    ) -> Result<i32, StoreError> {
        let q = sql::insert_returning(table, fields, id_column);
        self.bounded(async {
            tracing::debug!(sql = %q.sql, params = ?q.params, "query");
            let mut conn = self.acquire().await?;
            let mut query = sqlx::query_scalar::<_, i32>(&q.sql);
            for p in &q.params {
                query = query.bind(p.as_str());
            }
            let id = query.fetch_one(&mut *conn).await;
            conn.release().await;
            Ok::<_, StoreError>(id?)
        })
        .await
    }

    pub async fn delete_by_id(&self, table: &str, id_column: &str, id: &str) -> Result<u64, StoreError> {
        self.execute(sql::delete_by_id(table, id_column, id)).await
    }

    pub async fn delete_all(&self, table: &str) -> Result<u64, StoreError> {
        self.execute(sql::delete_all(table)).await
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        self.bounded(async {
            let mut conn = self.acquire().await?;
            let res = sqlx::query("SELECT 1").execute(&mut *conn).await;
            conn.release().await;
            res?;
            Ok::<_, StoreError>(())
        })
        .await
    }

    /// Run a write statement and return rows affected.
    async fn execute(&self, q: QueryBuf) -> Result<u64, StoreError> {
        self.bounded(async {
            tracing::debug!(sql = %q.sql, params = ?q.params, "query");
            let mut conn = self.acquire().await?;
            let mut query = sqlx::query(&q.sql);
            for p in &q.params {
                query = query.bind(p.as_str());
            }
            let res = query.execute(&mut *conn).await;
            conn.release().await;
            Ok::<_, StoreError>(res?.rows_affected())
        })
        .await
    }
}
