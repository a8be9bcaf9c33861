pub mod authors;
pub mod health;
pub mod moods;
pub mod quotes;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Routes are mounted at the root (no version prefix) to keep the paths the
/// browser frontend already calls.
///
/// ```text
/// /mood-types                          list mood categories
///
/// /authors                             list, create
/// /authors/{id}                        get, update, delete
///
/// /quotes                              list, create
/// /quotes/{id}                         get, update, soft delete
/// /quotes/mood/{mood}                  active quotes for a mood
/// /quotes/mood/{mood}/random           random quote, unseen by ?clientId=
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Mood catalog.
        .nest("/mood-types", moods::router())
        // Author CRUD.
        .nest("/authors", authors::router())
        // Quote CRUD, mood lookups and rotation.
        .nest("/quotes", quotes::router())
}
