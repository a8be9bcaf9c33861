//! Handlers for the `/authors` resource.
//!
//! Author payloads embed the author's active quotes.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use moodquotes_core::error::CoreError;
use moodquotes_core::types::DbId;
use moodquotes_db::models::author::{AuthorResponse, CreateAuthor, UpdateAuthor};
use moodquotes_db::models::quote::{to_responses, QuoteResponse};
use moodquotes_db::repositories::{AuthorRepo, QuoteRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn author_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Author",
        id,
    })
}

/// Load the active quotes of a single author.
async fn active_quotes_of(state: &AppState, author_id: DbId) -> AppResult<Vec<QuoteResponse>> {
    let quotes = QuoteRepo::list_active_by_authors(&state.pool, &[author_id]).await?;
    Ok(to_responses(quotes)?)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /authors
///
/// List all authors with their active quotes.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let authors = AuthorRepo::list(&state.pool).await?;
    let ids: Vec<DbId> = authors.iter().map(|a| a.id).collect();

    let mut by_author: HashMap<DbId, Vec<QuoteResponse>> = HashMap::new();
    for quote in QuoteRepo::list_active_by_authors(&state.pool, &ids).await? {
        let author_id = quote.author_id;
        by_author
            .entry(author_id)
            .or_default()
            .push(QuoteResponse::try_from(quote)?);
    }

    let data: Vec<AuthorResponse> = authors
        .into_iter()
        .map(|author| {
            let quotes = by_author.remove(&author.id).unwrap_or_default();
            AuthorResponse::new(author, quotes)
        })
        .collect();

    Ok(Json(DataResponse { data }))
}

/// GET /authors/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let author = AuthorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| author_not_found(id))?;
    let quotes = active_quotes_of(&state, id).await?;
    Ok(Json(DataResponse {
        data: AuthorResponse::new(author, quotes),
    }))
}

/// POST /authors
///
/// Create a new author. The response has an empty quote list.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAuthor>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let author = AuthorRepo::create(&state.pool, &input).await?;
    tracing::info!(author_id = author.id, "Author created");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: AuthorResponse::new(author, Vec::new()),
        }),
    ))
}

/// PUT /authors/{id}
///
/// Replace an author's name and bio.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAuthor>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let author = AuthorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| author_not_found(id))?;
    let quotes = active_quotes_of(&state, id).await?;
    Ok(Json(DataResponse {
        data: AuthorResponse::new(author, quotes),
    }))
}

/// DELETE /authors/{id}
///
/// Permanently delete an author together with all of its quotes.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !AuthorRepo::delete(&state.pool, id).await? {
        return Err(author_not_found(id));
    }
    tracing::info!(author_id = id, "Author deleted");
    Ok(StatusCode::NO_CONTENT)
}
