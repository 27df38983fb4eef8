//! Multi-tenant retail management API
//!
//! CRUD endpoints for shops, weekly operating hours, product catalogs and
//! per-shop user roles, backed by a SQLite store accessed through sqlx.
//! Shops and users are soft-deleted: flagged rows are treated as absent by
//! every default read.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

pub use config::Config;
pub use db::{create_pool, init_schema};
pub use error::{AppError, Result};

use sqlx::SqlitePool;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
}
