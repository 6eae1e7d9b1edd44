use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and generation backend.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "designer-api",
        "content_source": state.resolver.source_name(),
        "generation_timeout_secs": state.config.generation_timeout.as_secs()
    }))
}
