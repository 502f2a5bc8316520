//! Genre types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A movie genre, drawn from a closed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Comedy,
    Drama,
    Fantasy,
    Horror,
    Thriller,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Crime,
}

impl Genre {
    /// Every genre, in declaration order
    pub const ALL: [Genre; 9] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Comedy,
        Genre::Drama,
        Genre::Fantasy,
        Genre::Horror,
        Genre::Thriller,
        Genre::SciFi,
        Genre::Crime,
    ];

    /// Canonical (wire) name of the genre
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::Thriller => "Thriller",
            Genre::SciFi => "Sci-Fi",
            Genre::Crime => "Crime",
        }
    }

    /// Case-insensitive comparison against an arbitrary string
    pub fn matches_ignore_case(&self, name: &str) -> bool {
        self.as_str().to_lowercase() == name.to_lowercase()
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = String;

    /// Exact, case-sensitive lookup
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|genre| genre.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}
