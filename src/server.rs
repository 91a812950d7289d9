//! Listener startup and graceful shutdown.

use crate::config::AppConfig;
use crate::error::ServeError;
use crate::routes::app;
use crate::state::AppState;
use crate::store::{PgCenterStore, PgGateway};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Build the store from `config`, bind, and serve until Ctrl+C. Store outages never end
/// this future; only bind and accept-loop failures do.
pub async fn run(config: &AppConfig) -> Result<(), ServeError> {
    let gateway = PgGateway::new(&config.database)?;
    tracing::info!(
        pool_size = config.database.pool_size,
        timeout = ?config.database.statement_timeout,
        "store configured"
    );
    let state = AppState::new(
        Arc::new(PgCenterStore::new(gateway)),
        config.server.strict_status,
    );

    let addr = config.server.bind_addr;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;
    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServeError::Serve)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "cannot listen for Ctrl+C; running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
