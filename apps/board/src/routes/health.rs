use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status with dataset size and open board count.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "job-board",
        "listings": state.sessions.listings().len(),
        "open_boards": state.sessions.open_count().await,
        "max_boards": state.config.max_sessions,
    }))
}
