/// API route modules
pub mod movies;
pub mod root;
