//! Client exposure records (`client_seen_quotes`).

use moodquotes_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `client_seen_quotes` table: `client_id` was shown `quote_id`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClientSeenQuote {
    pub id: DbId,
    pub client_id: String,
    pub quote_id: DbId,
    pub seen_at: Timestamp,
}
