//! Process-local dish store. Contents are lost on exit.

use crate::domain::{Dish, DishStore, StoreError};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Ordered list of dishes behind an async lock.
///
/// Every mutation takes the write lock for its whole check-then-act sequence,
/// so the id uniqueness check on create cannot race with another writer.
#[derive(Default)]
pub struct InMemoryDishStore {
    dishes: RwLock<Vec<Dish>>,
}

impl InMemoryDishStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DishStore for InMemoryDishStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn list(&self) -> Result<Vec<Dish>, StoreError> {
        Ok(self.dishes.read().await.clone())
    }

    async fn get(&self, id: i64) -> Result<Dish, StoreError> {
        self.dishes
            .read()
            .await
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn create(&self, dish: Dish) -> Result<Dish, StoreError> {
        let mut dishes = self.dishes.write().await;
        if dishes.iter().any(|d| d.id == dish.id) {
            return Err(StoreError::Conflict(dish.id));
        }
        dishes.push(dish.clone());
        Ok(dish)
    }

    async fn update(&self, id: i64, mut dish: Dish) -> Result<Dish, StoreError> {
        dish.id = id;
        let mut dishes = self.dishes.write().await;
        let slot = dishes
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(StoreError::NotFound(id))?;
        *slot = dish.clone();
        Ok(dish)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut dishes = self.dishes.write().await;
        let index = dishes
            .iter()
            .position(|d| d.id == id)
            .ok_or(StoreError::NotFound(id))?;
        dishes.remove(index);
        Ok(())
    }
}
