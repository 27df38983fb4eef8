use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::{is_unique_violation, AppError, Result};

/// Shop entity
///
/// Shops are never physically removed; `soft_delete` flags the row and the
/// `*_active` readers treat flagged rows as absent.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Shop {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub phone_number: String,
    pub is_deleted: bool,
}

/// Create/update shop payload
#[derive(Debug, Clone, Deserialize)]
pub struct ShopPayload {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub phone_number: String,
}

/// Weekly opening hours for one shop and day
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ShopHours {
    pub id: i64,
    pub shop_id: i64,
    pub day_of_week: i64,
    pub open_time: String,
    pub close_time: String,
}

/// Create shop-hours payload
#[derive(Debug, Clone, Deserialize)]
pub struct ShopHoursPayload {
    pub day_of_week: i64,
    pub open_time: String,
    pub close_time: String,
}

impl Shop {
    /// List non-deleted shops in insertion order
    pub async fn list_active(pool: &SqlitePool) -> Result<Vec<Shop>> {
        let shops =
            sqlx::query_as::<_, Shop>("SELECT * FROM shops WHERE is_deleted = 0 ORDER BY id")
                .fetch_all(pool)
                .await?;
        Ok(shops)
    }

    /// Fetch one shop by id, treating soft-deleted rows as absent
    pub async fn find_active(pool: &SqlitePool, id: i64) -> Result<Option<Shop>> {
        let shop =
            sqlx::query_as::<_, Shop>("SELECT * FROM shops WHERE id = ? AND is_deleted = 0")
                .bind(id)
                .fetch_optional(pool)
                .await?;
        Ok(shop)
    }

    /// Insert a new shop and return the full created record
    pub async fn insert(pool: &SqlitePool, payload: &ShopPayload) -> Result<Shop> {
        let shop = sqlx::query_as::<_, Shop>(
            "INSERT INTO shops (name, latitude, longitude, phone_number) \
             VALUES (?, ?, ?, ?) RETURNING *",
        )
        .bind(&payload.name)
        .bind(payload.latitude)
        .bind(payload.longitude)
        .bind(&payload.phone_number)
        .fetch_one(pool)
        .await?;
        Ok(shop)
    }

    /// Replace the four mutable fields of an existing shop
    ///
    /// Callers must run the `find_active` guard first; the statement itself
    /// does not re-check the soft-delete flag.
    pub async fn update(pool: &SqlitePool, id: i64, payload: &ShopPayload) -> Result<Shop> {
        let shop = sqlx::query_as::<_, Shop>(
            "UPDATE shops SET name = ?, latitude = ?, longitude = ?, phone_number = ? \
             WHERE id = ? RETURNING *",
        )
        .bind(&payload.name)
        .bind(payload.latitude)
        .bind(payload.longitude)
        .bind(&payload.phone_number)
        .bind(id)
        .fetch_one(pool)
        .await?;
        Ok(shop)
    }

    /// Flag a shop as deleted
    pub async fn soft_delete(pool: &SqlitePool, id: i64) -> Result<()> {
        sqlx::query("UPDATE shops SET is_deleted = 1 WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}

impl ShopHours {
    /// Insert hours for a shop and day
    ///
    /// The UNIQUE (shop_id, day_of_week) constraint makes the insert atomic;
    /// a violation surfaces as `HoursConflict` and leaves the existing row
    /// untouched.
    pub async fn insert(
        pool: &SqlitePool,
        shop_id: i64,
        payload: &ShopHoursPayload,
    ) -> Result<ShopHours> {
        let hours = sqlx::query_as::<_, ShopHours>(
            "INSERT INTO shop_hours (shop_id, day_of_week, open_time, close_time) \
             VALUES (?, ?, ?, ?) RETURNING *",
        )
        .bind(shop_id)
        .bind(payload.day_of_week)
        .bind(&payload.open_time)
        .bind(&payload.close_time)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::HoursConflict
            } else {
                e.into()
            }
        })?;
        Ok(hours)
    }
}
