use anyhow::{Context, Result};
use sleepcoach_config::AppConfig;
use sleepcoach_core::build_prompt;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::cli::RequestArgs;
use crate::commands::{inference_with, provider_for};

/// Build the prompt, send it to the configured provider, and print the reply.
///
/// The reply goes to stdout; the model and response time go to stderr.
pub async fn execute(
    config: &AppConfig,
    request: RequestArgs,
    model: Option<String>,
    mock: bool,
) -> Result<()> {
    let prompt = build_prompt(&request.to_request(), &config.prompt)?;
    info!(branch = %prompt.branch(), hour = ?prompt.resolved_hour(), "Prompt built");
    debug!(prompt = %prompt, "Prompt text");

    let inference = inference_with(&config.inference, model.as_deref(), mock);
    let provider = provider_for(&inference)?;

    let started = Instant::now();
    let output = provider
        .run(&prompt)
        .await
        .with_context(|| format!("{} request failed", provider.provider_name()))?;
    let elapsed = started.elapsed();
    info!(response_time_ms = elapsed.as_millis() as u64, "Upstream replied");
    if output.is_raw() {
        warn!("Upstream reply had no text field, printing it serialized");
    }

    println!("{}", output.text());
    eprintln!("{}", timing_line(provider.model(), elapsed));
    Ok(())
}

fn timing_line(model: &str, elapsed: Duration) -> String {
    format!("model: {model}, responseTimeMs: {}", elapsed.as_millis())
}
