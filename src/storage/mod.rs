pub mod memory;
pub mod postgres;

pub use memory::InMemoryDishStore;
pub use postgres::PostgresDishStore;
