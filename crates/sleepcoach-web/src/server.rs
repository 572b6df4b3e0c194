use crate::assets::static_routes;
use crate::routes::{catalogue_routes, health_routes, prompt_routes};
use crate::{AppState, Result};
use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue};
use axum::Router;
use sleepcoach_config::{AppConfig, ServerConfig};
use sleepcoach_llm::InferenceProvider;
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

/// Assemble the full application router
///
/// Every response, rejections included, gets `Access-Control-Allow-Origin: *`.
/// `OPTIONS` requests, preflights included, reach the route's own handler.
pub fn build_router(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        .merge(prompt_routes(state.clone()))
        .merge(catalogue_routes(state.clone()))
        .merge(health_routes(state))
        .merge(static_routes(server.web_dir.as_deref()))
        .layer(DefaultBodyLimit::max(server.max_body_bytes()))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
}

/// Bind and serve until Ctrl-C
pub async fn start_server(config: &AppConfig, provider: Arc<dyn InferenceProvider>) -> Result<()> {
    let addr = config.server.socket_addr()?;
    let state =
        AppState::new(provider, config.prompt.clone()).with_inference(config.inference.clone());
    let app = build_router(state, &config.server);

    tracing::info!("Starting web server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
