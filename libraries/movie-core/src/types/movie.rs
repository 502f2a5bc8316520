//! Movie record types

use super::{Genre, MovieId};
use serde::{Deserialize, Serialize};

/// A stored movie record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: u32,
    pub rate: f64,
    pub poster: String,
    pub genre: Vec<Genre>,
}

/// Validated data for creating a new movie (everything but the id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: u32,
    pub rate: f64,
    pub poster: String,
    pub genre: Vec<Genre>,
}

/// Validated data for updating a movie (all fields optional)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateMovie {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<Vec<Genre>>,
}

impl Movie {
    /// Build a movie with a freshly generated id
    pub fn create(data: CreateMovie) -> Self {
        Self::with_id(MovieId::generate(), data)
    }

    /// Build a movie with a caller-chosen id
    pub fn with_id(id: MovieId, data: CreateMovie) -> Self {
        Self {
            id,
            title: data.title,
            year: data.year,
            director: data.director,
            duration: data.duration,
            rate: data.rate,
            poster: data.poster,
            genre: data.genre,
        }
    }

    /// Shallow-merge `patch` over this record. The id is never touched.
    pub fn apply(&mut self, patch: UpdateMovie) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(director) = patch.director {
            self.director = director;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(rate) = patch.rate {
            self.rate = rate;
        }
        if let Some(poster) = patch.poster {
            self.poster = poster;
        }
        if let Some(genre) = patch.genre {
            self.genre = genre;
        }
    }

    /// Whether any of this movie's genres matches `name`, ignoring case
    pub fn has_genre(&self, name: &str) -> bool {
        self.genre.iter().any(|genre| genre.matches_ignore_case(name))
    }
}
