use crate::mood::MoodType;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Invalid mood type: {0}")]
    InvalidMood(String),

    #[error("No quotes found for mood type: {0}")]
    NoQuotesAvailable(MoodType),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
