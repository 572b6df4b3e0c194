mod catalogue;
mod health;
mod prompt;

pub use catalogue::catalogue_routes;
pub use health::health_routes;
pub use prompt::{prompt_routes, MessageResponse, ALLOW_HEADERS, ALLOW_METHODS};
