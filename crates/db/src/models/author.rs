//! Author entity model and DTOs.

use moodquotes_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::quote::QuoteResponse;

/// A row from the `authors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Author {
    pub id: DbId,
    pub name: String,
    pub bio: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new author.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAuthor {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(max = 1000))]
    pub bio: Option<String>,
}

/// DTO for replacing an author's name and bio. An omitted `bio` clears it.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateAuthor {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(max = 1000))]
    pub bio: Option<String>,
}

/// An author together with its active quotes.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorResponse {
    pub id: DbId,
    pub name: String,
    pub bio: Option<String>,
    pub created_at: Timestamp,
    pub quotes: Vec<QuoteResponse>,
}

impl AuthorResponse {
    pub fn new(author: Author, quotes: Vec<QuoteResponse>) -> Self {
        Self {
            id: author.id,
            name: author.name,
            bio: author.bio,
            created_at: author.created_at,
            quotes,
        }
    }
}
