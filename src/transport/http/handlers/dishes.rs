use crate::domain::{DeleteResponse, Dish};
use crate::transport::http::error::ApiError;
use crate::transport::http::types::{AppState, ErrorResponse};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;

#[utoipa::path(
    get,
    path = "/dishes/",
    responses(
        (status = 200, description = "All dishes", body = [Dish]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_dishes_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Dish>>, ApiError> {
    let dishes = state.store.list().await?;
    Ok(Json(dishes))
}

#[utoipa::path(
    get,
    path = "/dishes/{id}",
    params(
        ("id" = i64, Path, description = "Dish id")
    ),
    responses(
        (status = 200, description = "The dish", body = Dish),
        (status = 404, description = "Dish not found", body = ErrorResponse),
        (status = 422, description = "Id is not an integer", body = ErrorResponse)
    )
)]
pub async fn get_dish_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Dish>, ApiError> {
    let Path(id) = id?;
    let dish = state.store.get(id).await?;
    Ok(Json(dish))
}

#[utoipa::path(
    post,
    path = "/dishes/",
    request_body = Dish,
    responses(
        (status = 200, description = "Dish created", body = Dish),
        (status = 400, description = "A dish with this id already exists", body = ErrorResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_dish_handler(
    State(state): State<AppState>,
    request: Result<Json<Dish>, JsonRejection>,
) -> Result<Json<Dish>, ApiError> {
    let Json(dish) = request?;
    let created = state.store.create(dish).await?;
    Ok(Json(created))
}

#[utoipa::path(
    put,
    path = "/dishes/{id}",
    params(
        ("id" = i64, Path, description = "Dish id; overrides any id in the body")
    ),
    request_body = Dish,
    responses(
        (status = 200, description = "Dish replaced", body = Dish),
        (status = 404, description = "Dish not found", body = ErrorResponse),
        (status = 422, description = "Unprocessable entity", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_dish_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    request: Result<Json<Dish>, JsonRejection>,
) -> Result<Json<Dish>, ApiError> {
    let Path(id) = id?;
    let Json(dish) = request?;
    let updated = state.store.update(id, dish).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/dishes/{id}",
    params(
        ("id" = i64, Path, description = "Dish id")
    ),
    responses(
        (status = 200, description = "Dish deleted", body = DeleteResponse),
        (status = 404, description = "Dish not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_dish_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let Path(id) = id?;
    state.store.delete(id).await?;
    Ok(Json(DeleteResponse::deleted()))
}
