//! # Sleepcoach Configuration
//!
//! Typed configuration records for the sleepcoach workspace. Every record is
//! loaded once at startup and passed explicitly to the code that needs it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sleepcoach_config::AppConfig;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load(None)?;
//!     println!("listening on {}", config.server.socket_addr()?);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
mod config;
mod error;
mod loader;

pub use components::*;
pub use config::*;
pub use error::{ConfigError, ConfigResult};
pub use loader::*;
