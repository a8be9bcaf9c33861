//! PostgreSQL-backed stores for the quote rotation selector.

use moodquotes_core::mood::MoodType;
use moodquotes_core::rotation::{ExposureStore, QuoteStore};
use moodquotes_core::types::DbId;

use crate::models::quote::Quote;
use crate::repositories::{ExposureRepo, QuoteRepo};
use crate::DbPool;

/// Implements [`QuoteStore`] and [`ExposureStore`] over a connection pool.
///
/// Each method is a single statement on the pool; nothing is wrapped in a
/// transaction.
#[derive(Clone)]
pub struct PgRotationStore {
    pool: DbPool,
}

impl PgRotationStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl QuoteStore for PgRotationStore {
    type Quote = Quote;
    type Error = sqlx::Error;

    async fn list_active_quote_ids(&self, mood: MoodType) -> Result<Vec<DbId>, sqlx::Error> {
        QuoteRepo::list_active_ids_by_mood(&self.pool, mood).await
    }

    async fn get_quote(&self, id: DbId) -> Result<Option<Quote>, sqlx::Error> {
        QuoteRepo::find_by_id(&self.pool, id).await
    }
}

impl ExposureStore for PgRotationStore {
    type Error = sqlx::Error;

    /// Candidates are already limited to the mood's active quotes, so the
    /// mood itself is not needed in the query.
    async fn list_exposed_ids(
        &self,
        client_id: &str,
        _mood: MoodType,
        candidate_ids: &[DbId],
    ) -> Result<Vec<DbId>, sqlx::Error> {
        ExposureRepo::list_exposed_ids(&self.pool, client_id, candidate_ids).await
    }

    async fn add_exposure(&self, client_id: &str, quote_id: DbId) -> Result<(), sqlx::Error> {
        ExposureRepo::add(&self.pool, client_id, quote_id).await
    }

    async fn delete_exposures(&self, client_id: &str, mood: MoodType) -> Result<u64, sqlx::Error> {
        ExposureRepo::delete_for_mood(&self.pool, client_id, mood).await
    }
}
