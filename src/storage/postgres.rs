//! Dish store backed by a PostgreSQL connection pool.
//!
//! The `dishes` table is created out-of-band (see `sql/dishes.sql`). Every
//! operation acquires one pooled connection, runs one statement and hands the
//! connection back when the guard drops, on success and error paths alike.

use crate::domain::{Dish, DishStore, StoreError};
use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use tracing::{debug, info};

// Casts keep decoding stable whether the table uses INTEGER/BIGINT ids or
// REAL/NUMERIC/DOUBLE PRECISION prices.
const SELECT_ALL_SQL: &str =
    "SELECT id::BIGINT AS id, name, description, price::DOUBLE PRECISION AS price FROM dishes";
const SELECT_ONE_SQL: &str = "SELECT id::BIGINT AS id, name, description, price::DOUBLE PRECISION AS price \
     FROM dishes WHERE id = $1";
const INSERT_SQL: &str = "INSERT INTO dishes (id, name, description, price) VALUES ($1, $2, $3, $4) \
     RETURNING id::BIGINT";
const UPDATE_SQL: &str = "UPDATE dishes SET name = $1, description = $2, price = $3 WHERE id = $4";
const DELETE_SQL: &str = "DELETE FROM dishes WHERE id = $1";

pub struct PostgresDishStore {
    pool: PgPool,
}

impl PostgresDishStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens the connection pool.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        info!("PostgreSQL connection pool established");
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn row_to_dish(row: &PgRow) -> Result<Dish, sqlx::Error> {
    Ok(Dish {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        price: row.try_get("price")?,
    })
}

#[async_trait]
impl DishStore for PostgresDishStore {
    fn name(&self) -> &'static str {
        "postgres"
    }

    async fn list(&self) -> Result<Vec<Dish>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query(SELECT_ALL_SQL).fetch_all(&mut *conn).await?;
        let dishes = rows
            .iter()
            .map(row_to_dish)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(dishes)
    }

    async fn get(&self, id: i64) -> Result<Dish, StoreError> {
        let mut conn = self.pool.acquire().await?;
        let row = sqlx::query(SELECT_ONE_SQL)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        match row {
            Some(row) => Ok(row_to_dish(&row)?),
            None => Err(StoreError::NotFound(id)),
        }
    }

    async fn create(&self, dish: Dish) -> Result<Dish, StoreError> {
        let mut conn = self.pool.acquire().await?;
        let id: i64 = sqlx::query_scalar(INSERT_SQL)
            .bind(dish.id)
            .bind(&dish.name)
            .bind(&dish.description)
            .bind(dish.price)
            .fetch_one(&mut *conn)
            .await?;
        debug!(id, "inserted dish");
        Ok(Dish { id, ..dish })
    }

    async fn update(&self, id: i64, dish: Dish) -> Result<Dish, StoreError> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query(UPDATE_SQL)
            .bind(&dish.name)
            .bind(&dish.description)
            .bind(dish.price)
            .bind(id)
            .execute(&mut *conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(Dish { id, ..dish })
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query(DELETE_SQL)
            .bind(id)
            .execute(&mut *conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
        info!("PostgreSQL connection pool closed");
    }
}
