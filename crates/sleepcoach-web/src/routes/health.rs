//! Health check endpoints

use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

pub fn health_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(ready_check))
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "sleepcoach-web"
    }))
}

/// Ready once a provider is configured, which is always true after startup
async fn ready_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ready",
        "provider": state.provider.provider_name(),
        "model": state.provider.model(),
    }))
}
