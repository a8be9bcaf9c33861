//! Route definitions for the mood catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::moods;
use crate::state::AppState;

/// Routes mounted at `/mood-types`.
///
/// ```text
/// GET /  -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(moods::list))
}
