use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::Result;

/// User entity
///
/// Mirrors the shop lifecycle: rows are only ever flagged deleted, and the
/// `*_active` readers treat flagged rows as absent.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub phone_number: String,
    pub is_deleted: bool,
}

/// Create/update user payload
#[derive(Debug, Clone, Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub phone_number: String,
}

/// Role assignment for one user within one shop
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserRole {
    pub id: i64,
    pub user_id: i64,
    pub shop_id: i64,
    pub role: String,
}

/// Role upsert payload
#[derive(Debug, Clone, Deserialize)]
pub struct UserRolePayload {
    pub shop_id: i64,
    pub role: String,
}

impl User {
    /// List non-deleted users in insertion order
    pub async fn list_active(pool: &SqlitePool) -> Result<Vec<User>> {
        let users =
            sqlx::query_as::<_, User>("SELECT * FROM users WHERE is_deleted = 0 ORDER BY id")
                .fetch_all(pool)
                .await?;
        Ok(users)
    }

    /// Fetch one user by id, treating soft-deleted rows as absent
    pub async fn find_active(pool: &SqlitePool, id: i64) -> Result<Option<User>> {
        let user =
            sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ? AND is_deleted = 0")
                .bind(id)
                .fetch_optional(pool)
                .await?;
        Ok(user)
    }

    /// Insert a new user and return the full created record
    pub async fn insert(pool: &SqlitePool, payload: &UserPayload) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, phone_number) VALUES (?, ?) RETURNING *",
        )
        .bind(&payload.name)
        .bind(&payload.phone_number)
        .fetch_one(pool)
        .await?;
        Ok(user)
    }

    /// Replace the mutable fields of an existing user
    pub async fn update(pool: &SqlitePool, id: i64, payload: &UserPayload) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            "UPDATE users SET name = ?, phone_number = ? WHERE id = ? RETURNING *",
        )
        .bind(&payload.name)
        .bind(&payload.phone_number)
        .bind(id)
        .fetch_one(pool)
        .await?;
        Ok(user)
    }

    /// Flag a user as deleted
    pub async fn soft_delete(pool: &SqlitePool, id: i64) -> Result<()> {
        sqlx::query("UPDATE users SET is_deleted = 1 WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}

impl UserRole {
    /// Insert or update the role row for a (user, shop) pair
    ///
    /// A single statement leaning on the UNIQUE (user_id, shop_id)
    /// constraint, so the upsert stays atomic under concurrent writers.
    pub async fn upsert(
        pool: &SqlitePool,
        user_id: i64,
        payload: &UserRolePayload,
    ) -> Result<UserRole> {
        let role = sqlx::query_as::<_, UserRole>(
            "INSERT INTO user_roles (user_id, shop_id, role) VALUES (?, ?, ?) \
             ON CONFLICT (user_id, shop_id) DO UPDATE SET role = excluded.role \
             RETURNING *",
        )
        .bind(user_id)
        .bind(payload.shop_id)
        .bind(&payload.role)
        .fetch_one(pool)
        .await?;
        Ok(role)
    }
}
