//! # Sleepcoach Web
//!
//! The HTTP envelope around the prompt builder:
//!
//! - `POST /api` builds a prompt, forwards it upstream, and answers
//!   `{"message": ...}`
//!   (optional `model` and `mock` fields pick the provider)
//! - `OPTIONS /api` answers the CORS preflight
//! - `GET /api/models` and `GET /api/templates` list what the form offers
//! - `/health` and `/ready` for liveness checks
//! - everything else serves the browser form
//!
//! Every response carries `Access-Control-Allow-Origin: *`.

pub mod routes;
pub mod server;

mod assets;
mod error;
mod state;

pub use error::{Result, WebError};
pub use server::{build_router, start_server};
pub use state::{AppState, ModelSelection};
