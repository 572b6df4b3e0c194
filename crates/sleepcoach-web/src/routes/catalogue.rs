//! Read-only listings used by the browser form

use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use sleepcoach_core::template_catalogue;

pub fn catalogue_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/models", get(list_models))
        .route("/api/templates", get(list_templates))
        .with_state(state)
}

/// Selectable models, the startup provider's model first
async fn list_models(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "default": state.provider.model(),
        "provider": state.provider.provider_name(),
        "models": state.inference.models(),
    }))
}

/// Branch texts under the active prompt policy
async fn list_templates(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "locale": state.policy.locale,
        "bedtimeHour": state.policy.bedtime_hour(),
        "templates": template_catalogue(&state.policy),
    }))
}
