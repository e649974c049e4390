//! HTTP server for the dish collection.
//!
//! `DISH_BACKEND` picks the store (`memory` by default, or `postgres` with
//! `DATABASE_URL`), `BIND_ADDR` the listen address.

use anyhow::Context;
use dish_service::app;
use dish_service::infra::config;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let backend = config::backend()?;
    info!(backend = backend.as_str(), "initializing dish store");
    let store = app::build_store(backend).await?;

    let addr = config::bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("API server listening on http://{}", addr);
    info!("Swagger UI available at http://{}/swagger-ui", addr);

    app::serve(listener, store, shutdown_signal()).await?;
    info!("graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for Ctrl+C; running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received (Ctrl+C)");
}
