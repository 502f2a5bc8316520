/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use movie_core::{FieldErrors, MovieError};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Origin not allowed by CORS: {0}")]
    CorsRejected(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Core error: {0}")]
    Core(#[from] MovieError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<FieldErrors> for ServerError {
    fn from(errors: FieldErrors) -> Self {
        ServerError::Validation(errors)
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ServerError::Validation(errors) => {
                return (StatusCode::BAD_REQUEST, Json(json!({ "error": errors })))
                    .into_response();
            }
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::CorsRejected(ref origin) => {
                tracing::warn!("Rejected request from origin {}", origin);
                (StatusCode::FORBIDDEN, "Not allowed by CORS".to_string())
            }
            ServerError::Core(MovieError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "Movie not found".to_string())
            }
            ServerError::Core(MovieError::Validation(errors)) => {
                return ServerError::Validation(errors).into_response();
            }
            ServerError::Core(ref e) => {
                tracing::error!("Core error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Storage error".to_string(),
                )
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ServerError::Io(ref e) => {
                tracing::error!("IO error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "IO error".to_string())
            }
        };

        let body = Json(json!({
            "message": message,
        }));

        (status, body).into_response()
    }
}
