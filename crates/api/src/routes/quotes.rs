//! Route definitions for quotes.

use axum::routing::get;
use axum::Router;

use crate::handlers::quotes;
use crate::state::AppState;

/// Routes mounted at `/quotes`.
///
/// ```text
/// GET    /                     -> list
/// POST   /                     -> create
/// GET    /{id}                 -> get
/// PUT    /{id}                 -> update
/// DELETE /{id}                 -> delete (soft)
/// GET    /mood/{mood}          -> list_by_mood
/// GET    /mood/{mood}/random   -> random_by_mood
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(quotes::list).post(quotes::create))
        .route(
            "/{id}",
            get(quotes::get).put(quotes::update).delete(quotes::delete),
        )
        .route("/mood/{mood}", get(quotes::list_by_mood))
        .route("/mood/{mood}/random", get(quotes::random_by_mood))
}
