//! Shared, read-only request state and per-request model selection

use crate::{Result, WebError};
use serde::Deserialize;
use sleepcoach_config::{InferenceConfig, PromptConfig};
use sleepcoach_core::ValidationError;
use sleepcoach_llm::{create_provider, InferenceProvider, MockProvider};
use std::sync::Arc;

/// Cloned into every handler. Nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn InferenceProvider>,
    pub policy: Arc<PromptConfig>,
    pub inference: Arc<InferenceConfig>,
}

impl AppState {
    /// State around an already built provider. Only its own model is
    /// selectable until [`AppState::with_inference`] widens the list.
    pub fn new(provider: Arc<dyn InferenceProvider>, policy: PromptConfig) -> Self {
        let inference = InferenceConfig {
            model: Some(provider.model().to_string()),
            models: Some(Vec::new()),
            ..Default::default()
        };
        Self {
            provider,
            policy: Arc::new(policy),
            inference: Arc::new(inference),
        }
    }

    /// Configuration used to build providers for other selectable models
    pub fn with_inference(mut self, inference: InferenceConfig) -> Self {
        self.inference = Arc::new(inference);
        self
    }

    /// Provider answering a request with `selection`
    ///
    /// The startup provider is reused when the request names no model or
    /// its own. Mock requests accept any model name, which only picks the
    /// canned voice.
    pub fn provider_for(&self, selection: &ModelSelection) -> Result<Arc<dyn InferenceProvider>> {
        let model = selection.model();
        if selection.mock {
            let model = model.unwrap_or_else(|| self.provider.model());
            return Ok(Arc::new(MockProvider::new(model)));
        }

        match model {
            None => Ok(self.provider.clone()),
            Some(model) if model == self.provider.model() => Ok(self.provider.clone()),
            Some(model) if self.inference.allows_model(model) => {
                create_provider(&self.inference.with_model(model)).map_err(WebError::from)
            }
            Some(model) => Err(WebError::UnknownModel(model.to_string())),
        }
    }
}

/// Optional `model` and `mock` fields sent next to the prompt fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ModelSelection {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub mock: bool,
}

impl ModelSelection {
    pub fn from_json(body: &[u8]) -> std::result::Result<Self, ValidationError> {
        serde_json::from_slice(body).map_err(|e| ValidationError::MalformedBody(e.to_string()))
    }

    /// Requested model, with an empty name treated as absent
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref().filter(|m| !m.is_empty())
    }
}
