/// Cross-origin policy and middleware
use crate::error::ServerError;
use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

/// Origins allowed to call the API from a browser
pub const ACCEPTED_ORIGINS: [&str; 4] = [
    "http://localhost:8080",
    "http://localhost:3000",
    "https://movies.com",
    "https://midu.dev",
];

/// Methods advertised on preflight responses
pub const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::PATCH,
    Method::DELETE,
];

/// Outcome of checking a request's `Origin` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    /// No `Origin` header: the browser only omits it for same-origin requests
    SameOrigin,
    /// Listed origin, echoed back in `Access-Control-Allow-Origin`
    Allowed(String),
    /// Unlisted origin
    Rejected(String),
}

/// Fixed origin allow-list
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    allowed: &'static [&'static str],
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self {
            allowed: &ACCEPTED_ORIGINS,
        }
    }
}

impl CorsPolicy {
    pub fn allowed_origins(&self) -> &'static [&'static str] {
        self.allowed
    }

    /// Layer answering preflight requests and echoing listed origins.
    /// It only omits headers for unlisted origins, so it must sit behind
    /// `cors_middleware`.
    pub fn layer(&self) -> CorsLayer {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(
                self.allowed_origins()
                    .iter()
                    .map(|origin| HeaderValue::from_static(*origin)),
            ))
            .allow_methods(ALLOWED_METHODS.to_vec())
            .allow_headers(AllowHeaders::mirror_request())
    }

    /// Decide what to do with a request declaring `origin`.
    /// Matching is exact, including scheme and port.
    pub fn decide(&self, origin: Option<&str>) -> CorsDecision {
        match origin {
            None => CorsDecision::SameOrigin,
            Some(origin) if self.allowed.contains(&origin) => {
                CorsDecision::Allowed(origin.to_string())
            }
            Some(origin) => CorsDecision::Rejected(origin.to_string()),
        }
    }
}

/// Middleware that rejects unlisted origins before they reach the
/// preflight layer or any handler
pub async fn cors_middleware(
    State(policy): State<Arc<CorsPolicy>>,
    request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    let origin = match request.headers().get(header::ORIGIN) {
        Some(value) => Some(
            value
                .to_str()
                .map_err(|_| ServerError::CorsRejected(format!("{:?}", value)))?
                .to_string(),
        ),
        None => None,
    };

    match policy.decide(origin.as_deref()) {
        CorsDecision::Rejected(origin) => Err(ServerError::CorsRejected(origin)),
        CorsDecision::SameOrigin | CorsDecision::Allowed(_) => Ok(next.run(request).await),
    }
}
