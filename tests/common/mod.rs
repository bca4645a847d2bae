//! Shared helpers for the HTTP-level integration tests.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use tower_http::limit::RequestBodyLimitLayer;

use filmoteka::{
    catalog_routes, common_routes, AppState, CatalogStore, Director, Genre, MemoryCatalog, Movie,
    MovieFields, MovieFilter, NameFields, StoreError,
};

const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Build the application router over a fresh in-memory store. The returned
/// store handle shares storage with the router, so tests can seed rows
/// directly and observe them over HTTP.
pub fn build_test_app() -> (Router, MemoryCatalog) {
    let store = MemoryCatalog::new();
    let app = build_test_app_with(store.clone());
    (app, store)
}

/// Build the application router over an existing store. This mirrors the
/// router construction in `main.rs`, so integration tests exercise the
/// same routes that production uses.
pub fn build_test_app_with(store: impl CatalogStore + 'static) -> Router {
    let state = AppState {
        store: Arc::new(store),
    };
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(catalog_routes(state))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
}

/// A store whose every operation fails, for driving the degraded paths:
/// readiness turning 503 and catalog handlers answering a sanitized 500.
pub struct OfflineStore;

impl OfflineStore {
    fn down() -> StoreError {
        StoreError::Storage("backend offline".into())
    }
}

#[async_trait]
impl CatalogStore for OfflineStore {
    async fn list_movies(&self, _filter: &MovieFilter) -> Result<Vec<Movie>, StoreError> {
        Err(Self::down())
    }

    async fn find_movie(&self, _id: i32) -> Result<Option<Movie>, StoreError> {
        Err(Self::down())
    }

    async fn insert_movie(&self, _fields: &MovieFields) -> Result<Movie, StoreError> {
        Err(Self::down())
    }

    async fn replace_movie(
        &self,
        _id: i32,
        _fields: &MovieFields,
    ) -> Result<Option<Movie>, StoreError> {
        Err(Self::down())
    }

    async fn delete_movie(&self, _id: i32) -> Result<bool, StoreError> {
        Err(Self::down())
    }

    async fn list_directors(&self) -> Result<Vec<Director>, StoreError> {
        Err(Self::down())
    }

    async fn find_director(&self, _id: i32) -> Result<Option<Director>, StoreError> {
        Err(Self::down())
    }

    async fn insert_director(&self, _fields: &NameFields) -> Result<Director, StoreError> {
        Err(Self::down())
    }

    async fn replace_director(
        &self,
        _id: i32,
        _fields: &NameFields,
    ) -> Result<Option<Director>, StoreError> {
        Err(Self::down())
    }

    async fn delete_director(&self, _id: i32) -> Result<bool, StoreError> {
        Err(Self::down())
    }

    async fn list_genres(&self) -> Result<Vec<Genre>, StoreError> {
        Err(Self::down())
    }

    async fn find_genre(&self, _id: i32) -> Result<Option<Genre>, StoreError> {
        Err(Self::down())
    }

    async fn insert_genre(&self, _fields: &NameFields) -> Result<Genre, StoreError> {
        Err(Self::down())
    }

    async fn replace_genre(
        &self,
        _id: i32,
        _fields: &NameFields,
    ) -> Result<Option<Genre>, StoreError> {
        Err(Self::down())
    }

    async fn delete_genre(&self, _id: i32) -> Result<bool, StoreError> {
        Err(Self::down())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(Self::down())
    }
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes, for asserting emptiness.
pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}
