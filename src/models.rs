//! Catalog entity records and their input field sets.
//!
//! Each entity comes in two shapes: the full record as stored (with its
//! assigned id) and the id-less field set built from a validated request
//! body. Clients never assign ids.

use serde::Serialize;
use sqlx::FromRow;

/// A row from the `movie` table.
///
/// `director_id` and `genre_id` are plain references with no integrity
/// guarantee; they may point at rows that no longer exist.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub trailer: String,
    pub year: i32,
    pub rating: f64,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

/// Field set for creating or replacing a movie.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieFields {
    pub title: String,
    pub description: String,
    pub trailer: String,
    pub year: i32,
    pub rating: f64,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

/// A row from the `director` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Director {
    pub id: i32,
    pub name: String,
}

/// A row from the `genre` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}

/// Field set for creating or replacing a director or genre.
#[derive(Debug, Clone, PartialEq)]
pub struct NameFields {
    pub name: String,
}
