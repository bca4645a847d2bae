//! Route registration: catalog resources plus health, readiness, version.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::handlers::{directors, genres, movies};
use crate::state::AppState;

/// Catalog CRUD routes. Collection paths are registered in both slash
/// forms; there is no automatic trailing-slash redirect.
pub fn catalog_routes(state: AppState) -> Router {
    Router::new()
        .route("/movies", get(movies::list).post(movies::create))
        .route("/movies/", get(movies::list).post(movies::create))
        .route(
            "/movies/:id",
            get(movies::read).put(movies::update).delete(movies::delete),
        )
        .route("/directors", get(directors::list).post(directors::create))
        .route("/directors/", get(directors::list).post(directors::create))
        .route(
            "/directors/:id",
            get(directors::read)
                .put(directors::update)
                .delete(directors::delete),
        )
        .route("/genres", get(genres::list).post(genres::create))
        .route("/genres/", get(genres::list).post(genres::create))
        .route(
            "/genres/:id",
            get(genres::read).put(genres::update).delete(genres::delete),
        )
        .with_state(state)
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    database: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn ready(
    State(state): State<AppState>,
) -> Result<Json<ReadyBody>, (StatusCode, Json<ReadyBody>)> {
    if state.store.ping().await.is_err() {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyBody {
                status: "degraded",
                database: "unavailable",
            }),
        ));
    }
    Ok(Json(ReadyBody {
        status: "ok",
        database: "ok",
    }))
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Common routes including readiness with a store check.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
