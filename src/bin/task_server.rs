//! Serves the task API over HTTP.
//!
//! Usage:
//!
//! ```text
//! TASKBOARD_HOST=127.0.0.1 TASKBOARD_PORT=8080 RUST_LOG=taskboard=debug task_server
//! ```
//!
//! Variables may also be supplied through a `.env` file in the working
//! directory. Tasks live in memory and are lost when the process exits.

use std::sync::Arc;

use mockable::DefaultClock;
use taskboard::{
    config::ServerConfig,
    task::{adapters::http::router, adapters::memory::InMemoryTaskStore, services::TaskService},
    telemetry::init_tracing,
};
use tokio::net::TcpListener;
use tracing::{error, info};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let dotenv_loaded = dotenvy::dotenv().is_ok();
    init_tracing()?;
    if dotenv_loaded {
        info!("loaded environment overrides from .env");
    }

    let config = ServerConfig::from_env().inspect_err(|err| {
        error!(error = %err, "invalid server configuration");
    })?;

    let service = TaskService::new(Arc::new(InMemoryTaskStore::new()), Arc::new(DefaultClock));
    let app = router(service);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await.inspect_err(|err| {
        error!(error = %err, %addr, "failed to bind listener");
    })?;
    info!(%addr, "task server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("task server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
