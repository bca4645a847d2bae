//! Filmoteka: movie catalog REST service library.

pub mod error;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod payload;
pub mod routes;
pub mod state;
pub mod store;

pub use error::AppError;
pub use filter::{MovieFilter, MovieListParams};
pub use models::{Director, Genre, Movie, MovieFields, NameFields};
pub use routes::{catalog_routes, common_routes};
pub use state::AppState;
pub use store::{ensure_database_exists, CatalogStore, MemoryCatalog, PgCatalog, StoreError};
