use crate::domain::{DeleteResponse, Dish};
use crate::transport::http::handlers::{dishes, health};
use crate::transport::http::types::{AppState, ErrorResponse, HealthResponse};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        dishes::list_dishes_handler,
        dishes::get_dish_handler,
        dishes::create_dish_handler,
        dishes::update_dish_handler,
        dishes::delete_dish_handler
    ),
    components(schemas(Dish, DeleteResponse, ErrorResponse, HealthResponse))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/dishes",
            get(dishes::list_dishes_handler).post(dishes::create_dish_handler),
        )
        .route(
            "/dishes/",
            get(dishes::list_dishes_handler).post(dishes::create_dish_handler),
        )
        .route(
            "/dishes/:id",
            get(dishes::get_dish_handler)
                .put(dishes::update_dish_handler)
                .delete(dishes::delete_dish_handler),
        )
        .with_state(app_state)
}
