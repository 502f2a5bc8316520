/// Shared application state
use crate::middleware::CorsPolicy;
use movie_core::MovieStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MovieStore>,
    pub cors: Arc<CorsPolicy>,
}

impl AppState {
    pub fn new(store: Arc<dyn MovieStore>, cors: Arc<CorsPolicy>) -> Self {
        Self { store, cors }
    }
}
