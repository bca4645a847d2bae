//! Genre CRUD handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::error::AppError;
use crate::models::{Genre, NameFields};
use crate::state::AppState;

/// `GET /genres/` returns bare name strings.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let genres = state.store.list_genres().await?;
    Ok(Json(genres.into_iter().map(|g| g.name).collect()))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Genre>, AppError> {
    let genre = state
        .store
        .find_genre(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(genre))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<StatusCode, AppError> {
    let fields = NameFields::from_json(&body)?;
    state.store.insert_genre(&fields).await?;
    Ok(StatusCode::CREATED)
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> Result<StatusCode, AppError> {
    let fields = NameFields::from_json(&body)?;
    match state.store.replace_genre(id, &fields).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(not_found(id)),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    if state.store.delete_genre(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("genre {id}"))
}
