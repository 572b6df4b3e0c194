//! The prompt endpoint: build, forward upstream, relay the reply

use crate::{AppState, WebError};
use crate::state::ModelSelection;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{post, MethodRouter},
    Json, Router,
};
use serde::Serialize;
use sleepcoach_core::{build_prompt, PromptRequest};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Methods advertised on `OPTIONS`
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

/// Request headers advertised on `OPTIONS`
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// Successful reply body
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub fn prompt_routes(state: AppState) -> Router {
    let api: MethodRouter<AppState> = post(prompt_handler)
        .options(options_handler)
        .fallback(method_not_allowed);

    Router::new()
        .route("/api", api.clone())
        .route("/api/", api)
        .with_state(state)
}

/// The body is read as raw bytes so that malformed JSON and oversized
/// bodies map to JSON envelopes instead of axum's plain-text rejections.
async fn prompt_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<MessageResponse>, WebError> {
    let body = body?;
    let request = PromptRequest::from_json(&body)?;
    let selection = ModelSelection::from_json(&body)?;
    let prompt = build_prompt(&request, &state.policy)?;
    let provider = state.provider_for(&selection)?;

    info!(
        model = provider.model(),
        kind = %prompt.kind(),
        branch = %prompt.branch(),
        hour = ?prompt.resolved_hour(),
        source = ?prompt.resolved().map(|r| r.source),
        "Prompt built"
    );
    debug!(prompt = %prompt, "Prompt text");

    let started = Instant::now();
    let output = provider.run(&prompt).await?;
    info!(
        response_time_ms = started.elapsed().as_millis() as u64,
        "Upstream replied"
    );
    if output.is_raw() {
        warn!(
            provider = provider.provider_name(),
            "Upstream reply had no text field, returning it serialized"
        );
    }

    Ok(Json(MessageResponse {
        message: output.into_text(),
    }))
}

async fn options_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS),
        ],
    )
}

async fn method_not_allowed() -> WebError {
    WebError::MethodNotAllowed
}
