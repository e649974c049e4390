//! Store construction and the server lifecycle.
//!
//! The hosting binary builds exactly one store at startup, hands it to the
//! router through `AppState`, and closes it once the server has drained.

use crate::domain::DishStore;
use crate::infra::config::{self, Backend};
use crate::storage::{InMemoryDishStore, PostgresDishStore};
use crate::transport::http::{create_router, ApiDoc, AppState};
use anyhow::Context;
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Creates the store for `backend`. The postgres backend reads `DATABASE_URL`.
pub async fn build_store(backend: Backend) -> anyhow::Result<Arc<dyn DishStore>> {
    match backend {
        Backend::Memory => Ok(Arc::new(InMemoryDishStore::new())),
        Backend::Postgres => {
            let database_url = config::database_url()?;
            let store = PostgresDishStore::connect(&database_url)
                .await
                .context("failed to connect to PostgreSQL")?;
            Ok(Arc::new(store))
        }
    }
}

/// Full application: API routes, OpenAPI docs, CORS and request tracing.
pub fn build_app(store: Arc<dyn DishStore>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    create_router(AppState::new(store))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Serves until `shutdown` resolves, then closes the store.
pub async fn serve<F>(
    listener: TcpListener,
    store: Arc<dyn DishStore>,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(store.clone());
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!(backend = store.name(), "server stopped, closing store");
    store.close().await;
    Ok(())
}
