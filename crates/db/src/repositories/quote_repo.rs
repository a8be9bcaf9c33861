//! Repository for the `quotes` table.
//!
//! Every read joins `authors` so rows carry the author's name. Deletion is a
//! soft delete (`is_active = false`); inactive quotes are excluded from all
//! `*_active*` queries.

use moodquotes_core::mood::MoodType;
use moodquotes_core::types::DbId;
use sqlx::PgPool;

use crate::models::quote::{CreateQuote, Quote, UpdateQuote};

/// Column list for a quote row aliased `q` joined with its author `a`.
const COLUMNS: &str =
    "q.id, q.text, q.author_id, q.mood_type, q.created_at, q.is_active, a.name AS author_name";

/// Provides CRUD operations and mood lookups for quotes.
pub struct QuoteRepo;

impl QuoteRepo {
    /// Insert a new active quote, returning it with its author name.
    pub async fn create(pool: &PgPool, input: &CreateQuote) -> Result<Quote, sqlx::Error> {
        let query = format!(
            "WITH q AS ( \
                 INSERT INTO quotes (text, author_id, mood_type) \
                 VALUES ($1, $2, $3) \
                 RETURNING * \
             ) \
             SELECT {COLUMNS} FROM q JOIN authors a ON a.id = q.author_id"
        );
        sqlx::query_as::<_, Quote>(&query)
            .bind(&input.text)
            .bind(input.author_id)
            .bind(input.mood_type.value())
            .fetch_one(pool)
            .await
    }

    /// Find a quote by ID regardless of whether it is active.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Quote>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM quotes q JOIN authors a ON a.id = q.author_id \
             WHERE q.id = $1"
        );
        sqlx::query_as::<_, Quote>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active quote by ID.
    pub async fn find_active_by_id(pool: &PgPool, id: DbId) -> Result<Option<Quote>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM quotes q JOIN authors a ON a.id = q.author_id \
             WHERE q.id = $1 AND q.is_active = true"
        );
        sqlx::query_as::<_, Quote>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all active quotes ordered by ID.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Quote>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM quotes q JOIN authors a ON a.id = q.author_id \
             WHERE q.is_active = true ORDER BY q.id"
        );
        sqlx::query_as::<_, Quote>(&query).fetch_all(pool).await
    }

    /// List the active quotes for a mood ordered by ID.
    pub async fn list_active_by_mood(
        pool: &PgPool,
        mood: MoodType,
    ) -> Result<Vec<Quote>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM quotes q JOIN authors a ON a.id = q.author_id \
             WHERE q.mood_type = $1 AND q.is_active = true ORDER BY q.id"
        );
        sqlx::query_as::<_, Quote>(&query)
            .bind(mood.value())
            .fetch_all(pool)
            .await
    }

    /// List the active quotes written by any of `author_ids`.
    pub async fn list_active_by_authors(
        pool: &PgPool,
        author_ids: &[DbId],
    ) -> Result<Vec<Quote>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM quotes q JOIN authors a ON a.id = q.author_id \
             WHERE q.author_id = ANY($1) AND q.is_active = true ORDER BY q.id"
        );
        sqlx::query_as::<_, Quote>(&query)
            .bind(author_ids)
            .fetch_all(pool)
            .await
    }

    /// IDs of the active quotes for a mood. Always read fresh.
    pub async fn list_active_ids_by_mood(
        pool: &PgPool,
        mood: MoodType,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT id FROM quotes WHERE mood_type = $1 AND is_active = true ORDER BY id",
        )
        .bind(mood.value())
        .fetch_all(pool)
        .await
    }

    /// Replace a quote's text, author and mood.
    ///
    /// Returns `None` if no row with the given `id` exists. Inactive quotes
    /// can be updated but stay inactive.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateQuote,
    ) -> Result<Option<Quote>, sqlx::Error> {
        let query = format!(
            "WITH q AS ( \
                 UPDATE quotes SET text = $2, author_id = $3, mood_type = $4 \
                 WHERE id = $1 \
                 RETURNING * \
             ) \
             SELECT {COLUMNS} FROM q JOIN authors a ON a.id = q.author_id"
        );
        sqlx::query_as::<_, Quote>(&query)
            .bind(id)
            .bind(&input.text)
            .bind(input.author_id)
            .bind(input.mood_type.value())
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a quote (set `is_active = false`).
    ///
    /// The quote's exposure records are deleted in the same transaction, so
    /// no client history points at an inactive quote. Returns `true` if the
    /// quote exists, whether or not it was already inactive.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query("UPDATE quotes SET is_active = false WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let found = result.rows_affected() > 0;
        if found {
            sqlx::query("DELETE FROM client_seen_quotes WHERE quote_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(found)
    }
}
