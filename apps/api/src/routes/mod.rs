pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // HTML form flow (upload page + rendered results)
        .route(
            "/",
            get(handlers::handle_upload_form).post(handlers::handle_match_form),
        )
        // JSON API
        .route("/api/v1/match", post(handlers::handle_match_api))
        .layer(body_limit)
        .with_state(state)
}
