//! Default values shared by the configuration components.

/// Default model run on the inference service
pub const DEFAULT_MODEL: &str = "@cf/google/gemma-3-12b-it";

/// Models offered to the browser form when none are configured
pub const DEFAULT_MODELS: &[&str] = &[
    DEFAULT_MODEL,
    "@cf/meta/llama-3.1-8b-instruct",
    "@cf/mistral/mistral-7b-instruct",
    "@cf/thebloke/codellama-7b-instruct",
];

/// Default Workers AI REST base URL
pub const DEFAULT_WORKERS_AI_ENDPOINT: &str = "https://api.cloudflare.com/client/v4";

/// Default Ollama endpoint
pub const DEFAULT_OLLAMA_ENDPOINT: &str = "http://localhost:11434";

/// Default bind host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port
pub const DEFAULT_PORT: u16 = 8787;

/// Default request body limit in bytes
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// Hour of day (24h) from which the urge prompt switches to a firm tone
pub const DEFAULT_BEDTIME_HOUR: u8 = 23;

/// Offset applied to ISO timestamps that carry their own zone.
/// Zero reads them in UTC, the clock of the hosted runtime.
pub const DEFAULT_REFERENCE_UTC_OFFSET_MINUTES: i32 = 0;
