/// HTTP routing
use crate::{api, middleware, state::AppState};
use axum::{
    middleware as axum_middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

/// Build the application router.
///
/// The origin check wraps every route, so a disallowed origin never reaches
/// a handler. Inside it, the preflight layer answers `OPTIONS` on every
/// route and adds `Access-Control-Allow-Origin` for listed origins.
pub fn create_router(app_state: AppState) -> Router {
    let cors_policy = Arc::clone(&app_state.cors);

    Router::new()
        .route("/", get(api::root::greeting))
        .route(
            "/movies",
            get(api::movies::list_movies).post(api::movies::create_movie),
        )
        .route(
            "/movies/:id",
            get(api::movies::get_movie)
                .patch(api::movies::update_movie)
                .delete(api::movies::delete_movie),
        )
        .layer(app_state.cors.layer())
        .layer(axum_middleware::from_fn_with_state(
            cors_policy,
            middleware::cors_middleware,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .with_state(app_state)
}
