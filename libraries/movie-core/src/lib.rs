//! Movies Core
//!
//! Domain types, request validation and the in-memory movie store.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Movie`, `MovieId`, `Genre`, `CreateMovie`, `UpdateMovie`
//! - **Validation**: `validate_movie` / `validate_partial_movie` over untyped JSON
//! - **Storage**: the `MovieStore` trait and its `InMemoryMovieStore` implementation
//! - **Error Handling**: unified `MovieError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use movie_core::{validate_movie, InMemoryMovieStore, Movie, MovieStore};
//! use serde_json::json;
//!
//! let input = json!({
//!     "title": "The Godfather",
//!     "year": 1972,
//!     "director": "Francis Ford Coppola",
//!     "duration": 175,
//!     "poster": "https://img.example/godfather.jpg",
//!     "genre": ["Crime", "Drama"]
//! });
//!
//! let store = InMemoryMovieStore::new();
//! let movie = Movie::create(validate_movie(&input).unwrap());
//! store.append(movie.clone()).unwrap();
//!
//! assert_eq!(store.list(Some("drama")).unwrap(), vec![movie]);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod seed;
pub mod store;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use error::{MovieError, Result};
pub use store::{InMemoryMovieStore, MovieStore};
pub use types::{CreateMovie, Genre, Movie, MovieId, UpdateMovie};
pub use validation::{
    validate_movie, validate_partial_movie, FieldError, FieldErrors, IssueCode, PathSegment,
};
