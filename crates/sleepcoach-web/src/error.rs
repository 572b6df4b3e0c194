//! Web errors and their JSON envelopes

use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use sleepcoach_config::ConfigError;
use sleepcoach_core::ValidationError;
use sleepcoach_llm::UpstreamError;
use thiserror::Error;

/// Everything a request or the server itself can fail with
#[derive(Error, Debug)]
pub enum WebError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("Unknown model: {0}")]
    UnknownModel(String),

    #[error(transparent)]
    Body(#[from] BytesRejection),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ConfigError> for WebError {
    fn from(err: ConfigError) -> Self {
        WebError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WebError>;

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::Validation(err) => {
                tracing::warn!(error = %err, "Rejected prompt request");
                (StatusCode::BAD_REQUEST, Json(json!({ "error": err.to_string() }))).into_response()
            }
            WebError::UnknownModel(model) => {
                tracing::warn!(model = %model, "Rejected model selection");
                let error = format!("Unknown model: {model}");
                (StatusCode::BAD_REQUEST, Json(json!({ "error": error }))).into_response()
            }
            WebError::Body(rejection) => {
                tracing::warn!(error = %rejection, "Could not read request body");
                (
                    rejection.status(),
                    Json(json!({ "error": rejection.body_text() })),
                )
                    .into_response()
            }
            WebError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(json!({ "error": "Method not allowed" })),
            )
                .into_response(),
            other => {
                tracing::error!(error = %other, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Internal server error",
                        "message": other.to_string(),
                    })),
                )
                    .into_response()
            }
        }
    }
}
