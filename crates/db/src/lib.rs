//! PostgreSQL persistence for the Mood Quotes service.
//!
//! Pool construction, embedded migrations, seed data, models and the
//! repository layer. [`rotation_store::PgRotationStore`] plugs the
//! repositories into the quote rotation selector from `moodquotes-core`.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod rotation_store;
pub mod seed;

pub type DbPool = sqlx::PgPool;

/// Maximum number of pooled connections.
const MAX_CONNECTIONS: u32 = 20;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await
}

/// Create a connection pool, retrying while the database is unreachable.
///
/// Makes up to `max_attempts` attempts (at least one), sleeping `delay`
/// between them. Returns the last error once attempts are exhausted.
pub async fn connect_with_retry(
    database_url: &str,
    max_attempts: u32,
    delay: Duration,
) -> Result<DbPool, sqlx::Error> {
    let max_attempts = max_attempts.max(1);
    let mut attempt = 1;
    loop {
        tracing::info!(attempt, max_attempts, "Connecting to database");
        match create_pool(database_url).await {
            Ok(pool) => return Ok(pool),
            Err(e) if attempt < max_attempts => {
                tracing::warn!(
                    attempt,
                    max_attempts,
                    error = %e,
                    retry_in_secs = delay.as_secs(),
                    "Database connection failed, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => {
                tracing::error!(attempts = attempt, error = %e, "Giving up connecting to database");
                return Err(e);
            }
        }
    }
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations under `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
