//! Movie storage
//!
//! `MovieStore` is the seam the HTTP layer talks to. `InMemoryMovieStore`
//! keeps an ordered `Vec` in process memory; nothing survives a restart.

use crate::error::{MovieError, Result};
use crate::types::{Movie, MovieId, UpdateMovie};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Storage operations over the movie collection
pub trait MovieStore: Send + Sync {
    /// All movies in insertion order, optionally restricted to those having
    /// a genre equal to `genre` ignoring case
    fn list(&self, genre: Option<&str>) -> Result<Vec<Movie>>;

    /// Get movie by ID
    fn get(&self, id: &MovieId) -> Result<Option<Movie>>;

    /// Append a movie whose id the caller has already assigned
    fn append(&self, movie: Movie) -> Result<()>;

    /// Merge `patch` over the stored movie and return the result
    fn update(&self, id: &MovieId, patch: UpdateMovie) -> Result<Movie>;

    /// Remove a movie and return it
    fn remove(&self, id: &MovieId) -> Result<Movie>;

    /// Number of stored movies
    fn len(&self) -> Result<usize>;

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

/// In-memory movie store backed by a `Vec`.
///
/// Clone-friendly via Arc; clones share the same collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMovieStore {
    movies: Arc<RwLock<Vec<Movie>>>,
}

impl InMemoryMovieStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `movies`, rejecting duplicate ids
    pub fn with_movies(movies: Vec<Movie>) -> Result<Self> {
        let store = Self::new();
        for movie in movies {
            store.append(movie)?;
        }
        Ok(store)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Movie>>> {
        self.movies
            .read()
            .map_err(|_| MovieError::storage("lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Movie>>> {
        self.movies
            .write()
            .map_err(|_| MovieError::storage("lock poisoned"))
    }
}

impl MovieStore for InMemoryMovieStore {
    fn list(&self, genre: Option<&str>) -> Result<Vec<Movie>> {
        let movies = self.read()?;
        Ok(match genre {
            Some(genre) => movies
                .iter()
                .filter(|movie| movie.has_genre(genre))
                .cloned()
                .collect(),
            None => movies.clone(),
        })
    }

    fn get(&self, id: &MovieId) -> Result<Option<Movie>> {
        let movies = self.read()?;
        Ok(movies.iter().find(|movie| &movie.id == id).cloned())
    }

    fn append(&self, movie: Movie) -> Result<()> {
        let mut movies = self.write()?;
        if movies.iter().any(|existing| existing.id == movie.id) {
            return Err(MovieError::Duplicate(movie.id));
        }
        tracing::debug!(id = %movie.id, title = %movie.title, "Appending movie");
        movies.push(movie);
        Ok(())
    }

    fn update(&self, id: &MovieId, patch: UpdateMovie) -> Result<Movie> {
        let mut movies = self.write()?;
        let movie = movies
            .iter_mut()
            .find(|movie| &movie.id == id)
            .ok_or_else(|| MovieError::NotFound(id.clone()))?;
        movie.apply(patch);
        tracing::debug!(id = %id, "Updated movie");
        Ok(movie.clone())
    }

    fn remove(&self, id: &MovieId) -> Result<Movie> {
        let mut movies = self.write()?;
        let index = movies
            .iter()
            .position(|movie| &movie.id == id)
            .ok_or_else(|| MovieError::NotFound(id.clone()))?;
        tracing::debug!(id = %id, "Removing movie");
        Ok(movies.remove(index))
    }

    fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CreateMovie, Genre};

    fn movie(title: &str, genre: Vec<Genre>) -> Movie {
        Movie::create(CreateMovie {
            title: title.to_string(),
            year: 2000,
            director: "Someone".to_string(),
            duration: 100,
            rate: 5.0,
            poster: "https://img.example/p.jpg".to_string(),
            genre,
        })
    }

    #[test]
    fn list_preserves_insertion_order() {
        let store = InMemoryMovieStore::new();
        let a = movie("A", vec![Genre::Drama]);
        let b = movie("B", vec![Genre::Action]);
        let c = movie("C", vec![Genre::Comedy]);
        store.append(a.clone()).unwrap();
        store.append(b.clone()).unwrap();
        store.append(c.clone()).unwrap();

        assert_eq!(store.list(None).unwrap(), vec![a, b, c]);
    }

    #[test]
    fn list_filters_genre_ignoring_case() {
        let store = InMemoryMovieStore::new();
        let drama = movie("Drama", vec![Genre::Crime, Genre::Drama]);
        let action = movie("Action", vec![Genre::Action]);
        store.append(drama.clone()).unwrap();
        store.append(action).unwrap();

        assert_eq!(store.list(Some("drama")).unwrap(), vec![drama.clone()]);
        assert_eq!(store.list(Some("DRAMA")).unwrap(), vec![drama]);
        assert!(store.list(Some("dram")).unwrap().is_empty());
        assert!(store.list(Some("Western")).unwrap().is_empty());
    }

    #[test]
    fn get_finds_by_id() {
        let store = InMemoryMovieStore::new();
        let m = movie("A", vec![Genre::Drama]);
        store.append(m.clone()).unwrap();

        assert_eq!(store.get(&m.id).unwrap(), Some(m));
        assert_eq!(store.get(&MovieId::new("missing")).unwrap(), None);
    }

    #[test]
    fn append_rejects_duplicate_id() {
        let store = InMemoryMovieStore::new();
        let m = movie("A", vec![Genre::Drama]);
        store.append(m.clone()).unwrap();

        let err = store.append(m).unwrap_err();
        assert!(matches!(err, MovieError::Duplicate(_)));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn update_merges_in_place() {
        let store = InMemoryMovieStore::new();
        let first = movie("A", vec![Genre::Drama]);
        let second = movie("B", vec![Genre::Horror]);
        store.append(first.clone()).unwrap();
        store.append(second.clone()).unwrap();

        let updated = store
            .update(
                &first.id,
                UpdateMovie {
                    year: Some(2020),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.year, 2020);
        assert_eq!(updated.id, first.id);
        assert_eq!(updated.title, first.title);
        // Stored record is replaced at the same position
        assert_eq!(store.list(None).unwrap(), vec![updated, second]);
    }

    #[test]
    fn update_missing_is_not_found() {
        let store = InMemoryMovieStore::new();
        let err = store
            .update(&MovieId::new("nope"), UpdateMovie::default())
            .unwrap_err();
        assert!(matches!(err, MovieError::NotFound(_)));
    }

    #[test]
    fn remove_is_immediate() {
        let store = InMemoryMovieStore::new();
        let m = movie("A", vec![Genre::Drama]);
        store.append(m.clone()).unwrap();

        assert_eq!(store.remove(&m.id).unwrap(), m);
        assert_eq!(store.get(&m.id).unwrap(), None);
        assert!(store.is_empty().unwrap());
        assert!(matches!(
            store.remove(&m.id).unwrap_err(),
            MovieError::NotFound(_)
        ));
    }

    #[test]
    fn clones_share_state() {
        let store = InMemoryMovieStore::new();
        let other = store.clone();
        store.append(movie("A", vec![Genre::Drama])).unwrap();
        assert_eq!(other.len().unwrap(), 1);
    }

    #[test]
    fn with_movies_rejects_duplicates() {
        let m = movie("A", vec![Genre::Drama]);
        assert!(InMemoryMovieStore::with_movies(vec![m.clone(), m]).is_err());
    }
}
