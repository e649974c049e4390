//! Mapping from store and extractor failures to HTTP responses.

use crate::domain::StoreError;
use crate::transport::http::types::ErrorResponse;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Dish not found")]
    NotFound,

    #[error("Dish with this ID already exists")]
    Conflict,

    /// Request body or path parameter could not be coerced to the expected type.
    #[error("{0}")]
    Unprocessable(String),

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Conflict => StatusCode::BAD_REQUEST,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
            StoreError::Conflict(id) => {
                warn!(id, "rejected duplicate dish id");
                ApiError::Conflict
            }
            StoreError::Database(e) => {
                error!(error = %e, "database operation failed");
                ApiError::Internal
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        ApiError::Unprocessable(format!(
            "Invalid JSON body: {} (expected: {{\"id\", \"name\", \"description\", \"price\"}})",
            err.body_text()
        ))
    }
}

impl From<PathRejection> for ApiError {
    fn from(err: PathRejection) -> Self {
        ApiError::Unprocessable(format!("Invalid dish id: {}", err.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            detail: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_expected_statuses() {
        assert_eq!(
            ApiError::from(StoreError::NotFound(1)).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(StoreError::Conflict(1)).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(StoreError::Database(sqlx::Error::PoolTimedOut)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn detail_messages_are_fixed() {
        assert_eq!(ApiError::NotFound.to_string(), "Dish not found");
        assert_eq!(
            ApiError::Conflict.to_string(),
            "Dish with this ID already exists"
        );
    }
}
