//! Director CRUD handlers.
//!
//! Deleting a director does not touch the movies that reference it; their
//! `director_id` keeps pointing at the removed row.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::error::AppError;
use crate::models::{Director, NameFields};
use crate::state::AppState;

/// `GET /directors/` returns bare name strings.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let directors = state.store.list_directors().await?;
    Ok(Json(directors.into_iter().map(|d| d.name).collect()))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Director>, AppError> {
    let director = state
        .store
        .find_director(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(director))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<StatusCode, AppError> {
    let fields = NameFields::from_json(&body)?;
    state.store.insert_director(&fields).await?;
    Ok(StatusCode::CREATED)
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> Result<StatusCode, AppError> {
    let fields = NameFields::from_json(&body)?;
    match state.store.replace_director(id, &fields).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(not_found(id)),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    if state.store.delete_director(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("director {id}"))
}
