//! Application state shared across route handlers.

use std::sync::Arc;

use kiosk_chat::ChatEngine;

/// Shared application state.
///
/// The engine is wrapped in `Arc` for cheap cloning across handler tasks.
/// All mutable state (the session store) lives inside the engine and is
/// internally synchronized.
#[derive(Clone)]
pub struct AppState {
    /// Dialogue engine backing /ask and /health.
    pub engine: Arc<ChatEngine>,
}

impl AppState {
    pub fn new(engine: ChatEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}
