use super::handlers;
use super::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/photos", get(handlers::api::list_photos))
        .route(
            "/api/upload",
            post(handlers::api::upload_photo).layer(DefaultBodyLimit::max(15 * 1024 * 1024)),
        )
        .route("/api/placeholder", get(handlers::api::placeholder))
}

pub fn upload_routes() -> Router<Arc<AppState>> {
    Router::new().route("/uploads/:filename", get(handlers::uploads::serve_upload))
}
