//! Ollama provider (`/api/generate`, non-streaming)

use crate::provider::send_json;
use crate::{InferenceProvider, ModelOutput, UpstreamResult};
use async_trait::async_trait;
use serde_json::json;
use sleepcoach_core::PromptText;
use std::time::Duration;
use tracing::debug;

/// Ollama provider
pub struct OllamaProvider {
    client: reqwest::Client,
    base_url: String,
    model: String,
    timeout: Option<Duration>,
}

impl OllamaProvider {
    /// Create a new Ollama provider
    pub fn new(base_url: String, model: String, timeout_secs: Option<u64>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            timeout: timeout_secs.map(Duration::from_secs),
        }
    }
}

#[async_trait]
impl InferenceProvider for OllamaProvider {
    async fn run(&self, prompt: &PromptText) -> UpstreamResult<ModelOutput> {
        let url = format!("{}/api/generate", self.base_url);
        debug!(model = %self.model, branch = %prompt.branch(), "Calling Ollama");

        let mut request = self.client.post(&url).json(&json!({
            "model": self.model,
            "prompt": prompt.as_str(),
            "stream": false,
        }));
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let payload = send_json(request).await?;
        Ok(ModelOutput::from_payload(&payload))
    }

    fn provider_name(&self) -> &str {
        "Ollama"
    }

    fn model(&self) -> &str {
        &self.model
    }
}
