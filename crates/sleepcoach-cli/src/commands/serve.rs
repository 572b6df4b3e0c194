use anyhow::{Context, Result};
use sleepcoach_config::AppConfig;
use tracing::info;

use crate::cli::ServeArgs;
use crate::commands::{inference_with, provider_for};

/// Run the HTTP server with flag overrides applied on top of `config`
pub async fn execute(mut config: AppConfig, args: ServeArgs) -> Result<()> {
    apply_overrides(&mut config, &args);
    config.validate().context("Invalid server configuration")?;

    let provider = provider_for(&config.inference)?;
    info!(
        locale = ?config.prompt.locale,
        bedtime_hour = config.prompt.bedtime_hour(),
        "Prompt policy loaded"
    );

    sleepcoach_web::start_server(&config, provider)
        .await
        .context("Web server failed")
}

fn apply_overrides(config: &mut AppConfig, args: &ServeArgs) {
    if let Some(host) = &args.host {
        config.server.host = Some(host.clone());
    }
    if let Some(port) = args.port {
        config.server.port = Some(port);
    }
    if let Some(dir) = &args.web_dir {
        config.server.web_dir = Some(dir.clone());
    }
    config.inference = inference_with(&config.inference, None, args.mock);
}
