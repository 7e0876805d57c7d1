//! Route handler functions for the ask and health endpoints.
//!
//! Handlers extract the JSON body via axum extractors, delegate to the chat
//! engine, and return JSON responses. The engine itself is infallible, so
//! every well-formed request answers with 200.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use kiosk_chat::{HealthInfo, Reply};

use crate::state::AppState;

/// Request body for POST /ask.
///
/// Both fields are optional: a missing query is handled by the empty-input
/// branch, a missing session id mints a fresh session.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// POST /ask - answer one user query.
pub async fn ask(State(state): State<AppState>, Json(req): Json<AskRequest>) -> Json<Reply> {
    let reply = state
        .engine
        .handle(&req.query, req.session_id.as_deref())
        .await;
    Json(reply)
}

/// GET /health - liveness plus catalog size and model name.
pub async fn health(State(state): State<AppState>) -> Json<HealthInfo> {
    Json(state.engine.health())
}
