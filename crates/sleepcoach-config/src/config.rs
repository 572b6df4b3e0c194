//! Top-level application configuration

use crate::{ConfigError, ConfigResult, InferenceConfig, PromptConfig, ServerConfig};
use serde::{Deserialize, Serialize};

/// Largest offset accepted for `reference_utc_offset_minutes` (UTC+14:00)
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// Root configuration record
///
/// ```toml
/// [server]
/// port = 8787
///
/// [inference]
/// provider = "workers_ai"
/// model = "@cf/google/gemma-3-12b-it"
///
/// [prompt]
/// locale = "zh"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream inference settings
    #[serde(default)]
    pub inference: InferenceConfig,
    /// Prompt builder policy
    #[serde(default)]
    pub prompt: PromptConfig,
}

impl AppConfig {
    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(hour) = self.prompt.bedtime_hour {
            if hour > 23 {
                return Err(ConfigError::Invalid(format!(
                    "prompt.bedtime_hour must be between 0 and 23, got {hour}"
                )));
            }
        }

        if let Some(offset) = self.prompt.reference_utc_offset_minutes {
            if offset.abs() > MAX_OFFSET_MINUTES {
                return Err(ConfigError::Invalid(format!(
                    "prompt.reference_utc_offset_minutes must be within ±{MAX_OFFSET_MINUTES}, got {offset}"
                )));
            }
        }

        if self.server.max_body_bytes == Some(0) {
            return Err(ConfigError::Invalid(
                "server.max_body_bytes must be greater than zero".to_string(),
            ));
        }

        self.server.socket_addr()?;
        Ok(())
    }
}
