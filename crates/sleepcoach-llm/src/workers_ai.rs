//! Cloudflare Workers AI provider (REST API)

use crate::provider::send_json;
use crate::{InferenceProvider, ModelOutput, UpstreamError, UpstreamResult};
use async_trait::async_trait;
use serde_json::{json, Value};
use sleepcoach_core::PromptText;
use std::time::Duration;
use tracing::debug;

/// Workers AI provider
///
/// Posts `{ "prompt", "stream": false }` to
/// `{base_url}/accounts/{account_id}/ai/run/{model}`.
pub struct WorkersAiProvider {
    client: reqwest::Client,
    base_url: String,
    account_id: String,
    api_token: String,
    model: String,
    timeout: Option<Duration>,
}

impl WorkersAiProvider {
    /// Create a new Workers AI provider
    pub fn new(
        base_url: String,
        account_id: String,
        api_token: String,
        model: String,
        timeout_secs: Option<u64>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            account_id,
            api_token,
            model,
            timeout: timeout_secs.map(Duration::from_secs),
        }
    }

    fn run_url(&self) -> String {
        format!(
            "{}/accounts/{}/ai/run/{}",
            self.base_url, self.account_id, self.model
        )
    }
}

#[async_trait]
impl InferenceProvider for WorkersAiProvider {
    async fn run(&self, prompt: &PromptText) -> UpstreamResult<ModelOutput> {
        let url = self.run_url();
        debug!(model = %self.model, branch = %prompt.branch(), "Calling Workers AI");

        let mut request = self
            .client
            .post(&url)
            .bearer_auth(&self.api_token)
            .json(&json!({
                "prompt": prompt.as_str(),
                "stream": false,
            }));
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let payload = send_json(request).await?;
        let answer = unwrap_envelope(payload)?;
        Ok(ModelOutput::from_payload(&answer))
    }

    fn provider_name(&self) -> &str {
        "Workers AI"
    }

    fn model(&self) -> &str {
        &self.model
    }
}

/// Strip the REST envelope `{ "result", "success", "errors" }`.
///
/// Payloads without an envelope are returned unchanged.
fn unwrap_envelope(payload: Value) -> UpstreamResult<Value> {
    let mut map = match payload {
        Value::Object(map) => map,
        other => return Ok(other),
    };

    if map.get("success") == Some(&Value::Bool(false)) {
        return Err(UpstreamError::Rejected(envelope_errors(&map)));
    }

    match map.remove("result") {
        Some(result) if map.contains_key("success") => Ok(result),
        Some(result) => {
            map.insert("result".to_string(), result);
            Ok(Value::Object(map))
        }
        None => Ok(Value::Object(map)),
    }
}

fn envelope_errors(map: &serde_json::Map<String, Value>) -> String {
    let messages: Vec<String> = map
        .get("errors")
        .and_then(Value::as_array)
        .map(|errors| {
            errors
                .iter()
                .map(|e| match (e.get("code"), e.get("message").and_then(Value::as_str)) {
                    (Some(code), Some(message)) => format!("{message} (code {code})"),
                    (None, Some(message)) => message.to_string(),
                    _ => e.to_string(),
                })
                .collect()
        })
        .unwrap_or_default();

    if messages.is_empty() {
        "no error details".to_string()
    } else {
        messages.join("; ")
    }
}
