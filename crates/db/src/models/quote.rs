//! Quote entity model and DTOs.

use moodquotes_core::error::CoreError;
use moodquotes_core::mood::MoodType;
use moodquotes_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `quotes` table joined with its author's name.
#[derive(Debug, Clone, FromRow)]
pub struct Quote {
    pub id: DbId,
    pub text: String,
    pub author_id: DbId,
    /// [`MoodType`] integer value.
    pub mood_type: i32,
    pub created_at: Timestamp,
    pub is_active: bool,
    pub author_name: String,
}

impl Quote {
    /// Decode the stored mood value.
    pub fn mood(&self) -> Result<MoodType, CoreError> {
        MoodType::from_value(self.mood_type).ok_or_else(|| {
            CoreError::Internal(format!(
                "quote {} has unknown mood_type {}",
                self.id, self.mood_type
            ))
        })
    }
}

/// DTO for creating a new quote. New quotes are always active.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuote {
    #[validate(length(min = 1, max = 2000))]
    pub text: String,
    pub author_id: DbId,
    pub mood_type: MoodType,
}

/// DTO for replacing a quote's text, author and mood. Activity is unchanged.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateQuote {
    #[validate(length(min = 1, max = 2000))]
    pub text: String,
    pub author_id: DbId,
    pub mood_type: MoodType,
}

/// Quote payload returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteResponse {
    pub id: DbId,
    pub text: String,
    pub mood_type: MoodType,
    pub mood_type_display: &'static str,
    pub created_at: Timestamp,
    pub author_name: String,
}

impl TryFrom<Quote> for QuoteResponse {
    type Error = CoreError;

    fn try_from(quote: Quote) -> Result<Self, Self::Error> {
        let mood = quote.mood()?;
        Ok(Self {
            id: quote.id,
            text: quote.text,
            mood_type: mood,
            mood_type_display: mood.display_name(),
            created_at: quote.created_at,
            author_name: quote.author_name,
        })
    }
}

/// Convert a batch of rows, failing on the first undecodable mood.
pub fn to_responses(quotes: Vec<Quote>) -> Result<Vec<QuoteResponse>, CoreError> {
    quotes.into_iter().map(QuoteResponse::try_from).collect()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::Utc;

    use super::*;

    fn row(mood_type: i32) -> Quote {
        Quote {
            id: 7,
            text: "Peace comes from within.".to_string(),
            author_id: 1,
            mood_type,
            created_at: Utc::now(),
            is_active: true,
            author_name: "Buddha".to_string(),
        }
    }

    #[test]
    fn response_carries_mood_and_display_label() {
        let response = QuoteResponse::try_from(row(10)).unwrap();
        assert_eq!(response.mood_type, MoodType::LowSelfEsteem);
        assert_eq!(response.mood_type_display, "Low Self-Esteem");
        assert_eq!(response.author_name, "Buddha");
    }

    #[test]
    fn unknown_mood_value_is_internal_error() {
        assert_matches!(QuoteResponse::try_from(row(0)), Err(CoreError::Internal(_)));
    }

    #[test]
    fn create_quote_validates_text_length() {
        let mut input = CreateQuote {
            text: String::new(),
            author_id: 1,
            mood_type: MoodType::Stress,
        };
        assert!(input.validate().is_err());
        input.text = "x".repeat(2000);
        assert!(input.validate().is_ok());
        input.text.push('x');
        assert!(input.validate().is_err());
    }
}
