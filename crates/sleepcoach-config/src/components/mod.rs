//! Configuration components, one per concern.

pub mod defaults;
pub mod inference;
pub mod prompt;
pub mod server;

pub use inference::*;
pub use prompt::*;
pub use server::*;
