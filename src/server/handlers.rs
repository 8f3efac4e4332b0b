//! HTTP request handlers.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use tracing::{debug, error};

use super::types::{ErrorResponse, FeedParams, HealthResponse};
use crate::core::gallery::render_gallery;
use crate::domain::ports::PostSource;

/// Shared application state. Immutable across requests; each request builds
/// its own record list and document string.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn PostSource>,
}

/// The gallery feed endpoint: validate the parameter, fetch one page of
/// records, sort/normalize/render, and answer with the document.
pub async fn feed(State(state): State<AppState>, Query(params): Query<FeedParams>) -> Response {
    let database_id = match params.database_id {
        Some(id) if !id.is_empty() => id,
        _ => {
            // Client error; no upstream call is made and nothing is logged
            // as a server fault.
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("Missing databaseId")),
            )
                .into_response();
        }
    };

    debug!("Feed request for database {}", database_id);

    let posts = match state.source.query_posts(&database_id).await {
        Ok(posts) => posts,
        Err(err) => {
            // Full detail goes to the log; the caller only sees a generic
            // server error.
            error!("Failed to fetch gallery data: {}", err);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to fetch data")),
            )
                .into_response();
        }
    };

    debug!("Rendering {} posts", posts.len());

    match render_gallery(posts) {
        Ok(document) => Html(document).into_response(),
        Err(err) => {
            error!("Failed to render gallery: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to fetch data")),
            )
                .into_response()
        }
    }
}

/// Liveness probe.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
