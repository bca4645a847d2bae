//! In-memory catalog store, used by the test suite and available for
//! running the service without PostgreSQL.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::filter::MovieFilter;
use crate::models::{Director, Genre, Movie, MovieFields, NameFields};
use crate::store::{CatalogStore, StoreError};

#[derive(Default)]
struct Tables {
    movies: BTreeMap<i32, Movie>,
    directors: BTreeMap<i32, Director>,
    genres: BTreeMap<i32, Genre>,
    // Last assigned id per table; ids start at 1 and are never reused.
    movie_seq: i32,
    director_seq: i32,
    genre_seq: i32,
}

/// Catalog store backed by in-process maps. `BTreeMap` iteration gives the
/// ascending-id list order of the store contract. Clones share storage.
#[derive(Clone, Default)]
pub struct MemoryCatalog {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StoreError> {
        self.tables
            .read()
            .map_err(|_| StoreError::Storage("lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StoreError> {
        self.tables
            .write()
            .map_err(|_| StoreError::Storage("lock poisoned".into()))
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalog {
    async fn list_movies(&self, filter: &MovieFilter) -> Result<Vec<Movie>, StoreError> {
        let tables = self.read()?;
        Ok(tables
            .movies
            .values()
            .filter(|movie| filter.matches(movie))
            .cloned()
            .collect())
    }

    async fn find_movie(&self, id: i32) -> Result<Option<Movie>, StoreError> {
        Ok(self.read()?.movies.get(&id).cloned())
    }

    async fn insert_movie(&self, fields: &MovieFields) -> Result<Movie, StoreError> {
        let mut tables = self.write()?;
        tables.movie_seq += 1;
        let movie = Movie {
            id: tables.movie_seq,
            title: fields.title.clone(),
            description: fields.description.clone(),
            trailer: fields.trailer.clone(),
            year: fields.year,
            rating: fields.rating,
            genre_id: fields.genre_id,
            director_id: fields.director_id,
        };
        tables.movies.insert(movie.id, movie.clone());
        Ok(movie)
    }

    async fn replace_movie(
        &self,
        id: i32,
        fields: &MovieFields,
    ) -> Result<Option<Movie>, StoreError> {
        let mut tables = self.write()?;
        match tables.movies.get_mut(&id) {
            Some(existing) => {
                *existing = Movie {
                    id,
                    title: fields.title.clone(),
                    description: fields.description.clone(),
                    trailer: fields.trailer.clone(),
                    year: fields.year,
                    rating: fields.rating,
                    genre_id: fields.genre_id,
                    director_id: fields.director_id,
                };
                Ok(Some(existing.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_movie(&self, id: i32) -> Result<bool, StoreError> {
        Ok(self.write()?.movies.remove(&id).is_some())
    }

    async fn list_directors(&self) -> Result<Vec<Director>, StoreError> {
        Ok(self.read()?.directors.values().cloned().collect())
    }

    async fn find_director(&self, id: i32) -> Result<Option<Director>, StoreError> {
        Ok(self.read()?.directors.get(&id).cloned())
    }

    async fn insert_director(&self, fields: &NameFields) -> Result<Director, StoreError> {
        let mut tables = self.write()?;
        tables.director_seq += 1;
        let director = Director {
            id: tables.director_seq,
            name: fields.name.clone(),
        };
        tables.directors.insert(director.id, director.clone());
        Ok(director)
    }

    async fn replace_director(
        &self,
        id: i32,
        fields: &NameFields,
    ) -> Result<Option<Director>, StoreError> {
        let mut tables = self.write()?;
        match tables.directors.get_mut(&id) {
            Some(existing) => {
                existing.name = fields.name.clone();
                Ok(Some(existing.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_director(&self, id: i32) -> Result<bool, StoreError> {
        Ok(self.write()?.directors.remove(&id).is_some())
    }

    async fn list_genres(&self) -> Result<Vec<Genre>, StoreError> {
        Ok(self.read()?.genres.values().cloned().collect())
    }

    async fn find_genre(&self, id: i32) -> Result<Option<Genre>, StoreError> {
        Ok(self.read()?.genres.get(&id).cloned())
    }

    async fn insert_genre(&self, fields: &NameFields) -> Result<Genre, StoreError> {
        let mut tables = self.write()?;
        tables.genre_seq += 1;
        let genre = Genre {
            id: tables.genre_seq,
            name: fields.name.clone(),
        };
        tables.genres.insert(genre.id, genre.clone());
        Ok(genre)
    }

    async fn replace_genre(
        &self,
        id: i32,
        fields: &NameFields,
    ) -> Result<Option<Genre>, StoreError> {
        let mut tables = self.write()?;
        match tables.genres.get_mut(&id) {
            Some(existing) => {
                existing.name = fields.name.clone();
                Ok(Some(existing.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_genre(&self, id: i32) -> Result<bool, StoreError> {
        Ok(self.write()?.genres.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.read().map(|_| ())
    }
}
