/// Core error types for the movies service
use thiserror::Error;

use crate::types::MovieId;
use crate::validation::FieldErrors;

/// Result type alias using `MovieError`
pub type Result<T> = std::result::Result<T, MovieError>;

/// Core error type for the movies service
#[derive(Error, Debug)]
pub enum MovieError {
    /// Movie not found
    #[error("Movie not found: {0}")]
    NotFound(MovieId),

    /// A movie with the same id is already stored
    #[error("Duplicate movie id: {0}")]
    Duplicate(MovieId),

    /// Input failed schema validation
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// Seed entry failed validation
    #[error("Invalid seed entry at index {index}: {errors}")]
    InvalidSeed { index: usize, errors: FieldErrors },

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl MovieError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

impl From<FieldErrors> for MovieError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}
