pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

/// Request bodies (JSON and multipart alike) are capped at 10MB.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/parse-resume", post(handlers::handle_parse_resume))
        .route("/api/analyze", post(handlers::handle_analyze))
        .route(
            "/api/rewrite-section",
            post(handlers::handle_rewrite_section),
        )
        .route("/api/health", get(health::health_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
