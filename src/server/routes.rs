//! HTTP route definitions.

use axum::{routing::get, Router};

use super::handlers::{self, AppState};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/feed", get(handlers::feed))
        .route("/health", get(handlers::health))
        .with_state(state)
}
