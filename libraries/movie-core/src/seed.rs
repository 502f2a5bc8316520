//! Seed data loading
//!
//! A seed file is a JSON array of movie objects. Entries may carry their own
//! `id`; entries without one get a fresh id. Every other field goes through
//! full validation, so a seed can never put a record in the store that the
//! API itself would have refused.

use crate::error::{MovieError, Result};
use crate::store::InMemoryMovieStore;
use crate::types::{Movie, MovieId};
use crate::validation::validate_movie;
use serde_json::Value;
use std::path::Path;

/// Parse seed movies from a JSON string
pub fn parse_seed(json: &str) -> Result<Vec<Movie>> {
    let entries: Vec<Value> = serde_json::from_str(json)?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let data = validate_movie(entry)
                .map_err(|errors| MovieError::InvalidSeed { index, errors })?;
            let id = match entry.get("id").and_then(Value::as_str) {
                Some(id) if !id.is_empty() => MovieId::new(id),
                _ => MovieId::generate(),
            };
            Ok(Movie::with_id(id, data))
        })
        .collect()
}

/// Read and parse a seed file
pub fn load_seed(path: impl AsRef<Path>) -> Result<Vec<Movie>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let movies = parse_seed(&json)?;
    tracing::info!("Loaded {} seed movies from {}", movies.len(), path.display());
    Ok(movies)
}

/// Build a store from a seed file
pub fn seeded_store(path: impl AsRef<Path>) -> Result<InMemoryMovieStore> {
    InMemoryMovieStore::with_movies(load_seed(path)?)
}
