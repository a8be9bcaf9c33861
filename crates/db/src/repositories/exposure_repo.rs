//! Repository for the `client_seen_quotes` table.

use moodquotes_core::mood::MoodType;
use moodquotes_core::types::DbId;
use sqlx::PgPool;

use crate::models::exposure::ClientSeenQuote;

/// Records which quotes each client has been shown.
pub struct ExposureRepo;

impl ExposureRepo {
    /// The distinct IDs among `candidate_ids` already shown to `client_id`.
    pub async fn list_exposed_ids(
        pool: &PgPool,
        client_id: &str,
        candidate_ids: &[DbId],
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT DISTINCT quote_id FROM client_seen_quotes \
             WHERE client_id = $1 AND quote_id = ANY($2)",
        )
        .bind(client_id)
        .bind(candidate_ids)
        .fetch_all(pool)
        .await
    }

    /// Record that `quote_id` was shown to `client_id`.
    pub async fn add(pool: &PgPool, client_id: &str, quote_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO client_seen_quotes (client_id, quote_id) VALUES ($1, $2)")
            .bind(client_id)
            .bind(quote_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Delete every exposure record of `client_id` whose quote has `mood`,
    /// active or not.
    ///
    /// Returns the number of rows removed.
    pub async fn delete_for_mood(
        pool: &PgPool,
        client_id: &str,
        mood: MoodType,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM client_seen_quotes s USING quotes q \
             WHERE s.quote_id = q.id AND s.client_id = $1 AND q.mood_type = $2",
        )
        .bind(client_id)
        .bind(mood.value())
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// All exposure records of a client, oldest first.
    pub async fn list_for_client(
        pool: &PgPool,
        client_id: &str,
    ) -> Result<Vec<ClientSeenQuote>, sqlx::Error> {
        sqlx::query_as::<_, ClientSeenQuote>(
            "SELECT id, client_id, quote_id, seen_at FROM client_seen_quotes \
             WHERE client_id = $1 ORDER BY id",
        )
        .bind(client_id)
        .fetch_all(pool)
        .await
    }
}
