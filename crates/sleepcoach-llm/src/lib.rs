//! # Sleepcoach LLM
//!
//! Upstream adapters: everything between a composed [`PromptText`] and the
//! text the model sends back.
//!
//! - [`WorkersAiProvider`]: Cloudflare Workers AI REST API
//! - [`OllamaProvider`]: a local or remote Ollama server
//! - [`MockProvider`]: canned offline replies
//!
//! Whatever shape the upstream answers with, the text is recovered through
//! [`ModelOutput::from_payload`].
//!
//! ```rust,no_run
//! use sleepcoach_config::{InferenceConfig, PromptConfig};
//! use sleepcoach_core::{build_prompt, PromptKind, PromptRequest};
//! use sleepcoach_llm::create_provider;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider(&InferenceConfig::default())?;
//!     let request = PromptRequest::new(PromptKind::Urge).with_local_hour(23);
//!     let prompt = build_prompt(&request, &PromptConfig::default())?;
//!
//!     let output = provider.run(&prompt).await?;
//!     println!("{}", output.text());
//!     Ok(())
//! }
//! ```
//!
//! [`PromptText`]: sleepcoach_core::PromptText

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod factory;
pub mod mock;
pub mod ollama;
pub mod output;
pub mod provider;
pub mod workers_ai;

pub use error::{UpstreamError, UpstreamResult};
pub use factory::create_provider;
pub use mock::MockProvider;
pub use ollama::OllamaProvider;
pub use output::{ModelOutput, RESPONSE_FIELDS};
pub use provider::InferenceProvider;
pub use workers_ai::WorkersAiProvider;
