//! Inference service configuration

use super::defaults;
use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Which inference backend receives the composed prompt
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InferenceProviderType {
    /// Cloudflare Workers AI REST API
    #[default]
    WorkersAi,
    /// Ollama `/api/generate`
    Ollama,
    /// Canned offline replies
    Mock,
}

/// Inference service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Backend to use
    #[serde(default)]
    pub provider: InferenceProviderType,
    /// Model identifier passed to the backend
    pub model: Option<String>,
    /// Models a request may select instead of `model`
    pub models: Option<Vec<String>>,
    /// Base URL, using the provider default if not set
    pub endpoint: Option<String>,
    /// Workers AI account id
    pub account_id: Option<String>,
    /// Workers AI API token. Prefer the `CLOUDFLARE_API_TOKEN` environment variable.
    #[serde(skip_serializing)]
    pub api_token: Option<String>,
    /// Per-request timeout. Unset means the call waits as long as upstream takes.
    pub timeout_secs: Option<u64>,
}

impl InferenceConfig {
    /// Get the endpoint, using provider-specific default if not specified
    pub fn endpoint(&self) -> String {
        self.endpoint.clone().unwrap_or_else(|| match self.provider {
            InferenceProviderType::WorkersAi => defaults::DEFAULT_WORKERS_AI_ENDPOINT.to_string(),
            InferenceProviderType::Ollama => defaults::DEFAULT_OLLAMA_ENDPOINT.to_string(),
            InferenceProviderType::Mock => String::new(),
        })
    }

    /// Get the model, using default if not specified
    pub fn model(&self) -> String {
        self.model
            .clone()
            .unwrap_or_else(|| defaults::DEFAULT_MODEL.to_string())
    }

    /// Selectable models, the default model first
    pub fn models(&self) -> Vec<String> {
        let default = self.model();
        let listed = match &self.models {
            Some(models) => models.clone(),
            None => defaults::DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
        };
        std::iter::once(default.clone())
            .chain(listed.into_iter().filter(|m| *m != default && !m.is_empty()))
            .collect()
    }

    /// Whether a request may select `model`
    pub fn allows_model(&self, model: &str) -> bool {
        self.models().iter().any(|m| m == model)
    }

    /// Copy of this configuration running `model` instead
    pub fn with_model(&self, model: impl Into<String>) -> Self {
        Self {
            model: Some(model.into()),
            ..self.clone()
        }
    }

    /// Account id and API token required by Workers AI
    pub fn workers_ai_credentials(&self) -> ConfigResult<(&str, &str)> {
        let account_id = self
            .account_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingCredential("CLOUDFLARE_ACCOUNT_ID"))?;
        let api_token = self
            .api_token
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingCredential("CLOUDFLARE_API_TOKEN"))?;
        Ok((account_id, api_token))
    }
}
