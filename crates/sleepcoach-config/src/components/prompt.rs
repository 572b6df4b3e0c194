//! Prompt policy configuration

use super::defaults;
use serde::{Deserialize, Serialize};

/// Language the coaching instructions are written in
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PromptLocale {
    /// Simplified Chinese
    #[default]
    Zh,
    /// English
    En,
}

/// Policy record read by the prompt builder on every call
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PromptConfig {
    /// Language of the generated instructions
    #[serde(default)]
    pub locale: PromptLocale,
    /// Hour (0-23) from which the urge prompt tells the user to go to bed
    pub bedtime_hour: Option<u8>,
    /// Offset, in minutes east of UTC, used to read ISO timestamps that carry a zone
    pub reference_utc_offset_minutes: Option<i32>,
}

impl PromptConfig {
    /// Get the bedtime hour, using default if not specified
    pub fn bedtime_hour(&self) -> u8 {
        self.bedtime_hour.unwrap_or(defaults::DEFAULT_BEDTIME_HOUR)
    }

    /// Get the reference offset in seconds east of UTC
    pub fn reference_offset_secs(&self) -> i32 {
        self.reference_utc_offset_minutes
            .unwrap_or(defaults::DEFAULT_REFERENCE_UTC_OFFSET_MINUTES)
            * 60
    }
}
