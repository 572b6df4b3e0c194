use anyhow::Result;
use clap::Parser;
use sleepcoach_config::AppConfig;
use tracing::debug;

use sleepcoach_cli::{
    cli::{Cli, Commands},
    commands, logging,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level());

    // File, then environment; command flags are applied per command
    let config = AppConfig::load(cli.config.as_deref())?;
    debug!(provider = ?config.inference.provider, "Configuration loaded");

    match cli.command {
        Commands::Serve(args) => commands::serve::execute(config, args).await,
        Commands::Prompt(args) => commands::prompt::execute(&config.prompt, args),
        Commands::Ask {
            request,
            model,
            mock,
        } => commands::ask::execute(&config, request, model, mock).await,
    }
}
