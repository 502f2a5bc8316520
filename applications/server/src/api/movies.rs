/// Movies API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use movie_core::{validate_movie, validate_partial_movie, Movie, MovieError, MovieId};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
pub struct MovieQuery {
    #[serde(default)]
    pub genre: Option<String>,
}

/// Unwrap an untyped JSON body, turning extractor rejections into 400s
fn json_body(body: std::result::Result<Json<Value>, JsonRejection>) -> Result<Value> {
    body.map(|Json(value)| value)
        .map_err(|rejection| ServerError::BadRequest(rejection.body_text()))
}

/// GET /movies
/// List all movies, optionally filtered by `?genre=` (case-insensitive)
pub async fn list_movies(
    State(app_state): State<AppState>,
    query: std::result::Result<Query<MovieQuery>, QueryRejection>,
) -> Result<Json<Vec<Movie>>> {
    let Query(query) =
        query.map_err(|rejection| ServerError::BadRequest(rejection.body_text()))?;
    let genre = query.genre.as_deref().filter(|genre| !genre.is_empty());
    let movies = app_state.store.list(genre)?;
    Ok(Json(movies))
}

/// GET /movies/:id
pub async fn get_movie(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<Movie>> {
    let movie_id = MovieId::new(id);
    let movie = app_state
        .store
        .get(&movie_id)?
        .ok_or_else(|| ServerError::NotFound("Movie not found!".to_string()))?;
    Ok(Json(movie))
}

/// POST /movies
/// Validate the full body and store it under a fresh id
pub async fn create_movie(
    State(app_state): State<AppState>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Movie>)> {
    let input = json_body(body)?;
    let data = validate_movie(&input)?;

    let movie = Movie::create(data);
    app_state.store.append(movie.clone())?;
    tracing::info!("Created movie {} ({})", movie.id, movie.title);

    Ok((StatusCode::CREATED, Json(movie)))
}

/// PATCH /movies/:id
/// Validate the partial body and merge it over the stored movie
pub async fn update_movie(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<Movie>> {
    let input = json_body(body)?;
    let patch = validate_partial_movie(&input)?;

    let movie_id = MovieId::new(id);
    let movie = app_state
        .store
        .update(&movie_id, patch)
        .map_err(|e| match e {
            MovieError::NotFound(_) => ServerError::NotFound("Movie not found".to_string()),
            other => other.into(),
        })?;

    Ok(Json(movie))
}

/// DELETE /movies/:id
pub async fn delete_movie(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<Value>> {
    let movie_id = MovieId::new(id);
    app_state.store.remove(&movie_id).map_err(|e| match e {
        MovieError::NotFound(_) => ServerError::NotFound("Movie not found".to_string()),
        other => other.into(),
    })?;

    tracing::info!("Deleted movie {}", movie_id);
    Ok(Json(json!({ "message": "Movie deleted" })))
}
