mod error;
mod handlers;
pub(crate) mod responses;

pub(crate) use error::ApiError;

use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the complete API router.
pub(crate) fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        // Page
        .route("/", get(handlers::index))
        // Search
        .route("/calculate", post(handlers::calculate))
        // Status
        .route("/api/status", get(handlers::get_status))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
