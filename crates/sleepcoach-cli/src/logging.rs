use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

const CRATES: [&str; 6] = [
    "sleepcoach_cli",
    "sleepcoach_config",
    "sleepcoach_core",
    "sleepcoach_llm",
    "sleepcoach_web",
    "tower_http",
];

/// Filter for an explicit level, scoped to our own crates
pub fn filter_for(level: LevelFilter) -> EnvFilter {
    let directives = CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",");
    EnvFilter::new(directives)
}

/// Initialize the global subscriber. Flags win, then `RUST_LOG`, then info.
pub fn init(level: Option<LevelFilter>) {
    let filter = match level {
        Some(level) => filter_for(level),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| filter_for(LevelFilter::INFO)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
