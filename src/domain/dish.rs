use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A dish on the menu. The `id` is supplied by the caller, never generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Dish {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Acknowledgement returned by a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
}

impl DeleteResponse {
    pub fn deleted() -> Self {
        Self {
            message: "Dish deleted successfully".to_string(),
        }
    }
}
