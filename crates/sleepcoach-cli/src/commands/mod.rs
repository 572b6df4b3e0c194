pub mod ask;
pub mod prompt;
pub mod serve;

use anyhow::{Context, Result};
use sleepcoach_config::{InferenceConfig, InferenceProviderType};
use sleepcoach_llm::{create_provider, InferenceProvider};
use std::sync::Arc;

/// Configuration with command-line overrides applied
pub(crate) fn inference_with(
    inference: &InferenceConfig,
    model: Option<&str>,
    mock: bool,
) -> InferenceConfig {
    let mut inference = match model {
        Some(model) => inference.with_model(model),
        None => inference.clone(),
    };
    if mock {
        inference.provider = InferenceProviderType::Mock;
    }
    inference
}

/// Build the provider for `inference`
pub(crate) fn provider_for(inference: &InferenceConfig) -> Result<Arc<dyn InferenceProvider>> {
    create_provider(inference).context("Failed to create inference provider")
}
