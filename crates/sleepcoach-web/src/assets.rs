//! Static serving of the browser form
//!
//! - Release builds: assets embedded via rust-embed
//! - Debug builds: served from `web/dist` in the crate
//! - `--web-dir` overrides both

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use rust_embed::Embed;
use tower_http::services::ServeDir;

#[derive(Embed)]
#[folder = "web/dist"]
struct Assets;

/// Router that answers every unmatched path with a static asset
pub fn static_routes(web_dir: Option<&str>) -> Router {
    if let Some(dir) = web_dir {
        tracing::info!("Serving static assets from: {}", dir);
        serve_from_dir(dir)
    } else if cfg!(debug_assertions) {
        let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/web/dist");
        tracing::info!("Debug mode: serving static assets from: {}", dir);
        serve_from_dir(dir)
    } else {
        tracing::info!("Release mode: serving embedded static assets");
        Router::new().fallback(embedded_handler)
    }
}

fn serve_from_dir(dir: &str) -> Router {
    Router::new().fallback_service(ServeDir::new(dir).append_index_html_on_directories(true))
}

async fn embedded_handler(req: Request<Body>) -> Response {
    let path = req.uri().path().trim_start_matches('/');
    let path = if path.is_empty() { "index.html" } else { path };

    match <Assets as Embed>::get(path) {
        Some(content) => respond_with_asset(path, content.data.into_owned()),
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

fn respond_with_asset(path: &str, data: Vec<u8>) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream().to_string();
    (StatusCode::OK, [(header::CONTENT_TYPE, mime)], data).into_response()
}
