//! Movie list filtering.
//!
//! `GET /movies/` accepts optional `director_id` and `genre_id` query
//! parameters. Resolution happens before any store access: absent or empty
//! values mean "no filter", anything else must parse as an integer id.

use serde::Deserialize;

use crate::error::AppError;
use crate::models::Movie;

/// Raw query parameters as received on the wire.
#[derive(Debug, Default, Deserialize)]
pub struct MovieListParams {
    pub director_id: Option<String>,
    pub genre_id: Option<String>,
}

/// Typed equality filter over the two movie references. When both are set
/// a movie must match both.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MovieFilter {
    pub director_id: Option<i32>,
    pub genre_id: Option<i32>,
}

impl MovieFilter {
    pub fn resolve(params: &MovieListParams) -> Result<Self, AppError> {
        Ok(Self {
            director_id: resolve_param("director_id", params.director_id.as_deref())?,
            genre_id: resolve_param("genre_id", params.genre_id.as_deref())?,
        })
    }

    /// Whether a movie satisfies the filter. Unset fields match everything;
    /// a set field never matches a movie whose reference is null.
    pub fn matches(&self, movie: &Movie) -> bool {
        self.director_id
            .map_or(true, |id| movie.director_id == Some(id))
            && self.genre_id.map_or(true, |id| movie.genre_id == Some(id))
    }
}

fn resolve_param(name: &str, raw: Option<&str>) -> Result<Option<i32>, AppError> {
    match raw {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| AppError::Validation(format!("invalid filter value for {name}"))),
    }
}
