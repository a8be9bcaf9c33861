use std::sync::Arc;

use moodquotes_db::rotation_store::PgRotationStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: moodquotes_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Quote and exposure stores used by the rotation selector.
    pub rotation: PgRotationStore,
}

impl AppState {
    pub fn new(pool: moodquotes_db::DbPool, config: ServerConfig) -> Self {
        Self {
            rotation: PgRotationStore::new(pool.clone()),
            pool,
            config: Arc::new(config),
        }
    }
}
