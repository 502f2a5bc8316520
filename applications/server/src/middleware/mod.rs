/// Request middleware
pub mod cors;

pub use cors::{cors_middleware, CorsDecision, CorsPolicy, ACCEPTED_ORIGINS, ALLOWED_METHODS};
