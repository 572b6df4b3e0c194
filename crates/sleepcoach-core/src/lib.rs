//! # Sleepcoach Core
//!
//! The prompt builder: turns a loosely typed time descriptor and a prompt
//! type into the instruction text sent to the inference service.
//!
//! Everything in this crate is pure. No clock reads, no I/O.
//!
//! ```rust
//! use sleepcoach_config::PromptConfig;
//! use sleepcoach_core::{build_prompt, PromptBranch, PromptRequest};
//!
//! let request = PromptRequest::from_json(br#"{"type":"urge","localTime":"23:40"}"#).unwrap();
//! let prompt = build_prompt(&request, &PromptConfig::default()).unwrap();
//! assert_eq!(prompt.branch(), PromptBranch::UrgeSleep);
//! assert_eq!(prompt.resolved_hour(), Some(23));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod error;
pub mod request;
pub mod templates;
pub mod time;

pub use builder::{build_prompt, template_catalogue, PromptBranch, PromptText, TemplateEntry};
pub use error::ValidationError;
pub use request::{LocalHour, PromptKind, PromptRequest};
pub use time::{resolve_hour, sanitize_time_text, HourSource, ResolvedHour};
