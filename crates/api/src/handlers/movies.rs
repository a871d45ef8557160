//! Handlers for the movie collection.
//!
//! Writes validate first and touch the store second, so a PATCH that is both
//! malformed and aimed at an unknown id answers 400, not 404.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use reel_core::error::CoreError;
use reel_core::movie::Movie;
use reel_core::types::MovieId;
use reel_core::validation::{validate_movie, validate_partial_movie};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::query::MovieListParams;
use crate::response::MessageResponse;
use crate::state::AppState;

const ENTITY: &str = "Movie";

/// Path ids that are not UUIDs cannot name a stored movie; they are treated
/// as unknown rather than malformed.
fn parse_id(raw: &str) -> Option<MovieId> {
    MovieId::parse_str(raw).ok()
}

fn not_found(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ENTITY,
        id: id.to_string(),
    })
}

/// GET /movies
///
/// List all movies, or only those tagged with `?genre=` (case-insensitive).
/// This route never fails: a query string that cannot be decoded lists
/// everything.
pub async fn list_movies(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Json<Vec<Movie>> {
    let params = match query {
        Ok(Query(pairs)) => MovieListParams::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Ignoring undecodable query string");
            MovieListParams::default()
        }
    };
    let movies = state.store.list(params.genre_filter()).await;

    tracing::debug!(genre = ?params.genre_filter(), count = movies.len(), "Listed movies");

    Json(movies)
}

/// GET /movies/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Movie>> {
    let movie = match parse_id(&id) {
        Some(movie_id) => state.store.find_by_id(movie_id).await,
        None => None,
    };

    movie
        .map(Json)
        .ok_or(AppError::LookupMiss { entity: ENTITY, id })
}

/// POST /movies
///
/// Create a movie from a fully validated body. Returns 201 with the stored
/// record, including its generated id.
pub async fn create_movie(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(body) = payload?;
    let input = validate_movie(&body)?;

    let movie = state.store.create(input).await;

    tracing::info!(movie_id = %movie.id, title = %movie.title, "Movie created");

    Ok((StatusCode::CREATED, Json(movie)))
}

/// PATCH /movies/{id}
///
/// Merge the fields present in the body onto an existing movie. An empty
/// object is accepted and leaves the record unchanged.
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Movie>> {
    let Json(body) = payload?;
    let changes = validate_partial_movie(&body)?;

    let movie_id = parse_id(&id).ok_or_else(|| not_found(&id))?;
    let movie = state
        .store
        .update(movie_id, changes)
        .await
        .ok_or_else(|| not_found(&id))?;

    tracing::info!(movie_id = %movie.id, "Movie updated");

    Ok(Json(movie))
}

/// DELETE /movies/{id}
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let movie_id = parse_id(&id).ok_or_else(|| not_found(&id))?;

    if !state.store.delete(movie_id).await {
        return Err(not_found(&id));
    }

    tracing::info!(%movie_id, "Movie deleted");

    Ok(Json(MessageResponse::new("Movie deleted")))
}
