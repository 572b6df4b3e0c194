//! Build a provider from configuration

use crate::{InferenceProvider, MockProvider, OllamaProvider, UpstreamResult, WorkersAiProvider};
use sleepcoach_config::{InferenceConfig, InferenceProviderType};
use std::sync::Arc;
use tracing::info;

/// Create the provider selected by `config`
///
/// Workers AI needs an account id and API token; their absence is a
/// configuration error reported here rather than on the first request.
pub fn create_provider(config: &InferenceConfig) -> UpstreamResult<Arc<dyn InferenceProvider>> {
    let provider: Arc<dyn InferenceProvider> = match config.provider {
        InferenceProviderType::WorkersAi => {
            let (account_id, api_token) = config.workers_ai_credentials()?;
            Arc::new(WorkersAiProvider::new(
                config.endpoint(),
                account_id.to_string(),
                api_token.to_string(),
                config.model(),
                config.timeout_secs,
            ))
        }
        InferenceProviderType::Ollama => Arc::new(OllamaProvider::new(
            config.endpoint(),
            config.model(),
            config.timeout_secs,
        )),
        InferenceProviderType::Mock => Arc::new(MockProvider::new(config.model())),
    };

    info!(
        provider = provider.provider_name(),
        model = provider.model(),
        "Inference provider ready"
    );
    Ok(provider)
}
