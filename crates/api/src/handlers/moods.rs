//! Handlers for the `/mood-types` resource.

use axum::response::IntoResponse;
use axum::Json;
use moodquotes_core::mood::MoodType;

use crate::response::DataResponse;

/// GET /mood-types
///
/// List every mood category with its integer value and display label.
pub async fn list() -> impl IntoResponse {
    Json(DataResponse {
        data: MoodType::catalog(),
    })
}
