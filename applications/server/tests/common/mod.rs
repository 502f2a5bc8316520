//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, Response},
    Router,
};
use movie_core::{InMemoryMovieStore, MovieStore};
use movie_server::{create_router, middleware::CorsPolicy, state::AppState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;

/// Create a test app over a fresh, empty in-memory store.
/// The store handle is returned so tests can inspect state directly.
pub fn create_test_app() -> (Router, Arc<InMemoryMovieStore>) {
    let store = Arc::new(InMemoryMovieStore::new());
    let app_state = AppState::new(
        Arc::clone(&store) as Arc<dyn MovieStore>,
        Arc::new(CorsPolicy::default()),
    );
    (create_router(app_state), store)
}

/// Send a request, optionally with a JSON body and an `Origin` header
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    origin: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(origin) = origin {
        builder = builder.header(header::ORIGIN, origin);
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };

    app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
}

/// Send a CORS preflight: `OPTIONS` with `Origin`, `Access-Control-Request-Method`
/// and, when given, `Access-Control-Request-Headers`
pub async fn send_preflight(
    app: &Router,
    uri: &str,
    origin: &str,
    request_method: Method,
    request_headers: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(Method::OPTIONS)
        .uri(uri)
        .header(header::ORIGIN, origin)
        .header(
            header::ACCESS_CONTROL_REQUEST_METHOD,
            request_method.as_str(),
        );
    if let Some(headers) = request_headers {
        builder = builder.header(header::ACCESS_CONTROL_REQUEST_HEADERS, headers);
    }

    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Read a response body as JSON
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read a response body as raw bytes
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

/// Movie fixtures
pub mod fixtures {
    use serde_json::{json, Value};

    pub fn shawshank() -> Value {
        json!({
            "title": "The Shawshank Redemption",
            "year": 1994,
            "director": "Frank Darabont",
            "duration": 142,
            "poster": "https://i.ebayimg.com/images/g/4goAAOSwMyBe7hnQ/s-l1200.webp",
            "genre": ["Drama"],
            "rate": 9.3
        })
    }

    pub fn dark_knight() -> Value {
        json!({
            "title": "The Dark Knight",
            "year": 2008,
            "director": "Christopher Nolan",
            "duration": 152,
            "poster": "https://i.ebayimg.com/images/g/yokAAOSw8w1YARbm/s-l1200.jpg",
            "genre": ["Action", "Crime", "Drama"],
            "rate": 9.0
        })
    }

    pub fn avatar() -> Value {
        json!({
            "title": "Avatar",
            "year": 2009,
            "director": "James Cameron",
            "duration": 162,
            "poster": "https://i.etsystatic.com/35681979/r/il/dfe3ba/3957859451/il_fullxfull.3957859451_h27r.jpg",
            "genre": ["Action", "Adventure", "Fantasy"]
        })
    }
}
