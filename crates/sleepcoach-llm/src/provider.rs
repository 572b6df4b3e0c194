//! The provider trait and the HTTP plumbing shared by the remote providers

use crate::{ModelOutput, UpstreamError, UpstreamResult};
use async_trait::async_trait;
use serde_json::Value;
use sleepcoach_core::PromptText;

/// An external text-generation service
///
/// One call per inbound request. Implementations do not retry.
#[async_trait]
pub trait InferenceProvider: Send + Sync {
    /// Send the prompt and return the generated text
    async fn run(&self, prompt: &PromptText) -> UpstreamResult<ModelOutput>;

    /// Provider name for logs
    fn provider_name(&self) -> &str;

    /// Model the prompt is sent to
    fn model(&self) -> &str;
}

/// Send a prepared request and decode a successful JSON body
pub(crate) async fn send_json(request: reqwest::RequestBuilder) -> UpstreamResult<Value> {
    let response = request.send().await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(UpstreamError::Status {
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body).map_err(|e| UpstreamError::Decode(e.to_string()))
}
