//! Handlers for the `/quotes` resource.
//!
//! Deleting a quote only deactivates it; inactive quotes are hidden from
//! every read endpoint and from the rotation.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use moodquotes_core::error::CoreError;
use moodquotes_core::mood::MoodType;
use moodquotes_core::rotation::{pick_uniform, select_quote};
use moodquotes_core::types::DbId;
use moodquotes_db::models::quote::{to_responses, CreateQuote, QuoteResponse, UpdateQuote};
use moodquotes_db::repositories::{AuthorRepo, QuoteRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::RandomQuoteParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn quote_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Quote", id })
}

/// Reject references to authors that do not exist.
async fn ensure_author_exists(state: &AppState, author_id: DbId) -> AppResult<()> {
    if AuthorRepo::exists(&state.pool, author_id).await? {
        Ok(())
    } else {
        Err(AppError::BadRequest("Author not found".to_string()))
    }
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// GET /quotes
///
/// List all active quotes.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let quotes = QuoteRepo::list_active(&state.pool).await?;
    Ok(Json(DataResponse {
        data: to_responses(quotes)?,
    }))
}

/// GET /quotes/{id}
///
/// Inactive quotes are reported as not found.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let quote = QuoteRepo::find_active_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| quote_not_found(id))?;
    Ok(Json(DataResponse {
        data: QuoteResponse::try_from(quote)?,
    }))
}

/// POST /quotes
///
/// Create a new active quote. Fails with 400 if the author does not exist.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateQuote>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    ensure_author_exists(&state, input.author_id).await?;

    let quote = QuoteRepo::create(&state.pool, &input).await?;
    tracing::info!(quote_id = quote.id, mood = %input.mood_type, "Quote created");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: QuoteResponse::try_from(quote)?,
        }),
    ))
}

/// PUT /quotes/{id}
///
/// Replace a quote's text, author and mood. Fails with 400 if the new
/// author does not exist.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateQuote>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let existing = QuoteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| quote_not_found(id))?;
    if existing.author_id != input.author_id {
        ensure_author_exists(&state, input.author_id).await?;
    }

    let quote = QuoteRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| quote_not_found(id))?;
    Ok(Json(DataResponse {
        data: QuoteResponse::try_from(quote)?,
    }))
}

/// DELETE /quotes/{id}
///
/// Soft delete: the quote is deactivated and leaves every mood pool.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !QuoteRepo::deactivate(&state.pool, id).await? {
        return Err(quote_not_found(id));
    }
    tracing::info!(quote_id = id, "Quote deactivated");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Mood lookups
// ---------------------------------------------------------------------------

/// GET /quotes/mood/{mood}
///
/// All active quotes for a mood. `mood` is a name or integer value.
pub async fn list_by_mood(
    State(state): State<AppState>,
    Path(mood): Path<String>,
) -> AppResult<impl IntoResponse> {
    let mood: MoodType = mood.parse()?;

    let quotes = QuoteRepo::list_active_by_mood(&state.pool, mood).await?;
    if quotes.is_empty() {
        return Err(AppError::Core(CoreError::NoQuotesAvailable(mood)));
    }
    Ok(Json(DataResponse {
        data: to_responses(quotes)?,
    }))
}

/// GET /quotes/mood/{mood}/random?clientId=
///
/// With a `clientId`, returns a quote that client has not seen for this
/// mood, starting over once all have been shown. Without one, returns any
/// active quote for the mood.
pub async fn random_by_mood(
    State(state): State<AppState>,
    Path(mood): Path<String>,
    Query(params): Query<RandomQuoteParams>,
) -> AppResult<impl IntoResponse> {
    let mood: MoodType = mood.parse()?;

    let quote = match params.client_id() {
        Some(client_id) => {
            let selection = select_quote(&state.rotation, &state.rotation, mood, client_id).await?;
            if selection.reset {
                tracing::debug!(
                    client_id,
                    %mood,
                    active_count = selection.active_count,
                    "Client saw every quote for mood, exposure history reset"
                );
            }
            tracing::debug!(client_id, %mood, quote_id = selection.quote_id, "Quote selected");
            selection.quote
        }
        None => {
            let quotes = QuoteRepo::list_active_by_mood(&state.pool, mood).await?;
            pick_uniform(&quotes)
                .cloned()
                .ok_or(AppError::Core(CoreError::NoQuotesAvailable(mood)))?
        }
    };

    Ok(Json(DataResponse {
        data: QuoteResponse::try_from(quote)?,
    }))
}
