//! Kiosk API crate - axum HTTP server and route handlers.
//!
//! Exposes the dialogue engine over REST: POST /ask answers user queries,
//! GET /health reports catalog size and readiness.

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
