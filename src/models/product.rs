use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::Result;

/// Product entity, owned by exactly one shop and one category
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub shop_id: i64,
    pub category_id: i64,
    pub name: String,
    pub amount: i64,
    pub price: f64,
}

/// Create/update product payload
#[derive(Debug, Clone, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub amount: i64,
    pub price: f64,
    pub category_id: i64,
}

/// Category entity, shared across shops
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Create category payload
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
}

impl Product {
    /// Fetch one product by id
    pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(product)
    }

    /// List every product belonging to a shop
    pub async fn list_for_shop(pool: &SqlitePool, shop_id: i64) -> Result<Vec<Product>> {
        let products =
            sqlx::query_as::<_, Product>("SELECT * FROM products WHERE shop_id = ? ORDER BY id")
                .bind(shop_id)
                .fetch_all(pool)
                .await?;
        Ok(products)
    }

    /// Insert a new product under a shop
    pub async fn insert(
        pool: &SqlitePool,
        shop_id: i64,
        payload: &ProductPayload,
    ) -> Result<Product> {
        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products (shop_id, category_id, name, amount, price) \
             VALUES (?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(shop_id)
        .bind(payload.category_id)
        .bind(&payload.name)
        .bind(payload.amount)
        .bind(payload.price)
        .fetch_one(pool)
        .await?;
        Ok(product)
    }

    /// Replace the mutable fields of a product; the owning shop never changes
    pub async fn update(pool: &SqlitePool, id: i64, payload: &ProductPayload) -> Result<Product> {
        let product = sqlx::query_as::<_, Product>(
            "UPDATE products SET category_id = ?, name = ?, amount = ?, price = ? \
             WHERE id = ? RETURNING *",
        )
        .bind(payload.category_id)
        .bind(&payload.name)
        .bind(payload.amount)
        .bind(payload.price)
        .bind(id)
        .fetch_one(pool)
        .await?;
        Ok(product)
    }
}

impl Category {
    /// List all categories
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(categories)
    }

    /// Insert a new category; names are globally unique
    pub async fn insert(pool: &SqlitePool, payload: &CategoryPayload) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name) VALUES (?) RETURNING *",
        )
        .bind(&payload.name)
        .fetch_one(pool)
        .await?;
        Ok(category)
    }
}
