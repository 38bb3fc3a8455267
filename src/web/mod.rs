mod error;
mod handlers;
mod routes;
pub mod security;
mod state;

pub use state::AppState;

use crate::Config;
use anyhow::Result;
use axum::middleware;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

/// Development server: local asset paths resolve to placeholder images.
pub async fn serve(config: Config, addr: &str) -> Result<()> {
    run(config, addr, false).await
}

/// Production server: image paths are served as-is.
pub async fn serve_production(config: Config, addr: &str) -> Result<()> {
    run(config, addr, true).await
}

async fn run(config: Config, addr: &str, production_mode: bool) -> Result<()> {
    tracing::info!(
        "Serving '{}' from {}",
        config.site.title,
        config.uploads.dir
    );

    let state = Arc::new(AppState::new(config, production_mode));

    let limiter = state.upload_limiter.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(60));
        loop {
            interval.tick().await;
            limiter.cleanup();
        }
    });

    let app = app(state);

    let listener = TcpListener::bind(addr).await?;
    let app = app.into_make_service_with_connect_info::<SocketAddr>();
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .merge(routes::upload_routes())
        .layer(middleware::from_fn(security::apply_security_headers))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
