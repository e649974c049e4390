//! Storage contract shared by the in-memory and PostgreSQL variants.

use crate::domain::Dish;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Dish {0} not found")]
    NotFound(i64),

    #[error("Dish with id {0} already exists")]
    Conflict(i64),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Trait that defines the contract for any dish store.
///
/// The HTTP layer only talks to this trait, so the backend is picked once at
/// startup and handlers never know which one they are using.
#[async_trait]
pub trait DishStore: Send + Sync {
    /// Short backend name reported by the health endpoint.
    fn name(&self) -> &'static str;

    /// Returns every dish. The in-memory store keeps insertion order; the
    /// database store returns rows in whatever order the database picks.
    async fn list(&self) -> Result<Vec<Dish>, StoreError>;

    async fn get(&self, id: i64) -> Result<Dish, StoreError>;

    async fn create(&self, dish: Dish) -> Result<Dish, StoreError>;

    /// Fully replaces the dish stored under `id`.
    ///
    /// The returned record always carries `id`, whatever `dish.id` was in the
    /// request body.
    async fn update(&self, id: i64, dish: Dish) -> Result<Dish, StoreError>;

    async fn delete(&self, id: i64) -> Result<(), StoreError>;

    /// Checks that the backing storage is reachable.
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    /// Releases backend resources. Called once after the server stops.
    async fn close(&self) {}
}
