mod genre;
mod ids;
mod movie;

pub use genre::Genre;
pub use ids::MovieId;
pub use movie::{CreateMovie, Movie, UpdateMovie};
