//! Router setup with routes and middleware.
//!
//! Configures the axum Router with permissive CORS (the kiosk widget is
//! embedded into pages served from other campus hosts), request tracing,
//! and a body size limit.

use axum::extract::DefaultBodyLimit;
use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the axum Router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/ask", post(handlers::ask))
        .route("/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(64 * 1024)) // queries are short
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
