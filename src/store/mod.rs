//! Catalog persistence.
//!
//! Handlers talk to storage only through [`CatalogStore`], so the PostgreSQL
//! backend and the in-memory backend are interchangeable behind a shared
//! handle.

mod memory;
mod postgres;

pub use memory::MemoryCatalog;
pub use postgres::{ensure_database_exists, PgCatalog};

use async_trait::async_trait;
use thiserror::Error;

use crate::filter::MovieFilter;
use crate::models::{Director, Genre, Movie, MovieFields, NameFields};

/// A storage failure. Absence is never an error here: lookups express it
/// through `Option` and deletes through `bool`.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("storage: {0}")]
    Storage(String),
}

/// Durable storage for the three catalog entity types.
///
/// Ids are assigned on insert, starting at 1, and are not reused for the
/// lifetime of the store. List operations return rows in ascending id order.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// List movies matching `filter`; an unset filter lists everything.
    async fn list_movies(&self, filter: &MovieFilter) -> Result<Vec<Movie>, StoreError>;
    async fn find_movie(&self, id: i32) -> Result<Option<Movie>, StoreError>;
    async fn insert_movie(&self, fields: &MovieFields) -> Result<Movie, StoreError>;
    /// Overwrite every field of an existing movie. `None` when absent.
    async fn replace_movie(
        &self,
        id: i32,
        fields: &MovieFields,
    ) -> Result<Option<Movie>, StoreError>;
    /// Remove a movie. `false` when absent.
    async fn delete_movie(&self, id: i32) -> Result<bool, StoreError>;

    async fn list_directors(&self) -> Result<Vec<Director>, StoreError>;
    async fn find_director(&self, id: i32) -> Result<Option<Director>, StoreError>;
    async fn insert_director(&self, fields: &NameFields) -> Result<Director, StoreError>;
    async fn replace_director(
        &self,
        id: i32,
        fields: &NameFields,
    ) -> Result<Option<Director>, StoreError>;
    async fn delete_director(&self, id: i32) -> Result<bool, StoreError>;

    async fn list_genres(&self) -> Result<Vec<Genre>, StoreError>;
    async fn find_genre(&self, id: i32) -> Result<Option<Genre>, StoreError>;
    async fn insert_genre(&self, fields: &NameFields) -> Result<Genre, StoreError>;
    async fn replace_genre(
        &self,
        id: i32,
        fields: &NameFields,
    ) -> Result<Option<Genre>, StoreError>;
    async fn delete_genre(&self, id: i32) -> Result<bool, StoreError>;

    /// Check backing-store connectivity, for readiness checks.
    async fn ping(&self) -> Result<(), StoreError>;
}
