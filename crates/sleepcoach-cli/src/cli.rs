use clap::{Args, Parser, Subcommand, ValueEnum};
use sleepcoach_core::{LocalHour, PromptKind, PromptRequest};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages (default)
    Info,
    /// Debug messages, including prompt text
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Parser)]
#[command(name = "sleepcoach")]
#[command(about = "sleepcoach - time-aware bedtime coaching through a hosted language model")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set log level (off, error, warn, info, debug, trace)
    /// If not specified, uses RUST_LOG or defaults to 'info'
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (defaults to ~/.config/sleepcoach/config.toml)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Explicit level from flags; `--log-level` wins over `-v`
    pub fn log_level(&self) -> Option<LevelFilter> {
        match (self.log_level, self.verbose) {
            (Some(level), _) => Some(level.into()),
            (None, true) => Some(LevelFilter::DEBUG),
            (None, false) => None,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),

    /// Print the composed prompt and its branch without calling the model
    Prompt(RequestArgs),

    /// Build the prompt, send it upstream, and print the reply
    Ask {
        #[command(flatten)]
        request: RequestArgs,

        /// Model to run instead of the configured one
        #[arg(short, long)]
        model: Option<String>,

        /// Answer with canned offline replies instead of calling upstream
        #[arg(long)]
        mock: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Bind host (overrides config and SLEEPCOACH_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port (overrides config and SLEEPCOACH_PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Serve the browser form from this directory
    #[arg(long)]
    pub web_dir: Option<String>,

    /// Answer with canned offline replies instead of calling upstream
    #[arg(long)]
    pub mock: bool,
}

/// Prompt kind as accepted on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    #[default]
    Urge,
    Praise,
}

impl From<KindArg> for PromptKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Urge => PromptKind::Urge,
            KindArg::Praise => PromptKind::Praise,
        }
    }
}

/// The same fields a browser sends to `POST /api`
#[derive(Args, Debug, Clone, Default)]
pub struct RequestArgs {
    /// Prompt type
    #[arg(short = 't', long = "type", value_enum, default_value_t = KindArg::Urge)]
    pub kind: KindArg,

    /// Hour of day, 0-23
    #[arg(long, allow_negative_numbers = true)]
    pub local_hour: Option<i64>,

    /// ISO-8601 timestamp, e.g. 2025-01-01T23:30:00+08:00
    #[arg(long)]
    pub iso: Option<String>,

    /// Clock text, e.g. 23:30 or 2330
    #[arg(long)]
    pub local_time: Option<String>,
}

impl RequestArgs {
    pub fn to_request(&self) -> PromptRequest {
        PromptRequest {
            kind: self.kind.into(),
            local_hour: self.local_hour.map(LocalHour::Integer),
            iso: self.iso.clone().filter(|s| !s.is_empty()),
            local_time: self.local_time.clone().filter(|s| !s.is_empty()),
        }
    }
}
