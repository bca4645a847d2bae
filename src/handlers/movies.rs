//! Movie CRUD handlers: list, read, create, update, delete.
//!
//! The collection endpoint is asymmetric on purpose: listing returns bare
//! title strings, while reading by id returns the full record.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::error::AppError;
use crate::filter::{MovieFilter, MovieListParams};
use crate::models::{Movie, MovieFields};
use crate::state::AppState;

/// `GET /movies/` with optional `director_id` and `genre_id` filters.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<MovieListParams>,
) -> Result<Json<Vec<String>>, AppError> {
    let filter = MovieFilter::resolve(&params)?;
    let movies = state.store.list_movies(&filter).await?;
    Ok(Json(movies.into_iter().map(|m| m.title).collect()))
}

/// `GET /movies/:id`
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Movie>, AppError> {
    let movie = state
        .store
        .find_movie(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(movie))
}

/// `POST /movies/`
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<StatusCode, AppError> {
    let fields = MovieFields::from_json(&body)?;
    state.store.insert_movie(&fields).await?;
    Ok(StatusCode::CREATED)
}

/// `PUT /movies/:id` replaces the whole record, so the body must carry the
/// full field set, references included. Validation runs before the row is
/// looked up: a malformed body is a 400 even when the id does not exist.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> Result<StatusCode, AppError> {
    let fields = MovieFields::from_replacement_json(&body)?;
    match state.store.replace_movie(id, &fields).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(not_found(id)),
    }
}

/// `DELETE /movies/:id`
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    if state.store.delete_movie(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("movie {id}"))
}
