use crate::domain::DishStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DishStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn DishStore>) -> Self {
        Self { store }
    }
}

/// Body of every non-2xx response.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct HealthResponse {
    /// `ok` or `unhealthy`.
    pub status: String,
    /// Store backend in use (`memory` or `postgres`).
    pub backend: String,
}
