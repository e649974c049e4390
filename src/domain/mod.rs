//! Domain types for the dish collection.

pub mod dish;
pub mod store;

pub use dish::{DeleteResponse, Dish};
pub use store::{DishStore, StoreError};
