pub mod pool;
pub mod tables;

pub use pool::create_pool;

use sqlx::SqlitePool;

/// Apply the schema, creating all required tables on first run.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Initializing database schema");

    for statement in tables::SCHEMA.split(';') {
        let statement = statement.trim();
        if statement.is_empty() {
            continue;
        }
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::info!("Database initialized successfully");

    Ok(())
}
