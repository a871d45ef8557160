//! In-memory movie store.
//!
//! Records live in an ordered `Vec` behind a single [`RwLock`]. Lookups are
//! linear scans. Every find-then-mutate sequence runs under one write guard,
//! so concurrent requests never interleave on the same record.

pub mod seed;

use reel_core::movie::{CreateMovie, Movie, UpdateMovie};
use reel_core::types::MovieId;
use tokio::sync::RwLock;

pub use seed::SeedError;

/// Process-wide movie collection, shared by handlers through `Arc`.
#[derive(Debug, Default)]
pub struct MovieStore {
    movies: RwLock<Vec<Movie>>,
}

impl MovieStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `movies` in the given order.
    ///
    /// Fails if two records share an id.
    pub fn from_movies(movies: Vec<Movie>) -> Result<Self, SeedError> {
        for (i, movie) in movies.iter().enumerate() {
            if movies[..i].iter().any(|m| m.id == movie.id) {
                return Err(SeedError::DuplicateId(movie.id));
            }
        }
        Ok(Self {
            movies: RwLock::new(movies),
        })
    }

    /// Create a store loaded with the bundled catalogue.
    pub fn seeded() -> Result<Self, SeedError> {
        let movies = seed::load_seed()?;
        tracing::debug!(count = movies.len(), "Seed catalogue loaded");
        Self::from_movies(movies)
    }

    /// All movies in insertion order, or only those tagged with `genre`
    /// (case-insensitive) when a filter is given.
    pub async fn list(&self, genre: Option<&str>) -> Vec<Movie> {
        let movies = self.movies.read().await;
        match genre {
            Some(name) => movies.iter().filter(|m| m.has_genre(name)).cloned().collect(),
            None => movies.clone(),
        }
    }

    pub async fn find_by_id(&self, id: MovieId) -> Option<Movie> {
        self.movies.read().await.iter().find(|m| m.id == id).cloned()
    }

    /// Append a new movie under a freshly generated id and return it.
    pub async fn create(&self, input: CreateMovie) -> Movie {
        let mut movies = self.movies.write().await;

        let mut id = MovieId::new_v4();
        while movies.iter().any(|m| m.id == id) {
            id = MovieId::new_v4();
        }

        let movie = Movie::new(id, input);
        movies.push(movie.clone());
        movie
    }

    /// Merge `changes` onto the movie with `id`, returning the merged record.
    ///
    /// Returns `None` if no movie has that id.
    pub async fn update(&self, id: MovieId, changes: UpdateMovie) -> Option<Movie> {
        let mut movies = self.movies.write().await;
        let index = movies.iter().position(|m| m.id == id)?;

        let mut merged = movies[index].clone();
        merged.apply(changes);
        movies[index] = merged.clone();
        Some(merged)
    }

    /// Remove the movie with `id`. Returns `false` if it did not exist.
    pub async fn delete(&self, id: MovieId) -> bool {
        let mut movies = self.movies.write().await;
        match movies.iter().position(|m| m.id == id) {
            Some(index) => {
                movies.remove(index);
                true
            }
            None => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.movies.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.movies.read().await.is_empty()
    }
}
