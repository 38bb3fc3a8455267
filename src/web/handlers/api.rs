use crate::services::{photos, placeholder, uploads};
use crate::web::state::AppState;
use axum::extract::{ConnectInfo, Multipart, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;

fn client_error(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": message })),
    )
        .into_response()
}

fn server_error(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": message })),
    )
        .into_response()
}

/// POST /api/upload
pub async fn upload_photo(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    mut multipart: Multipart,
) -> Response {
    let rate_key = format!("upload:{}", addr.ip());
    if !state.upload_limiter.check(&rate_key) {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(serde_json::json!({ "error": "Too many uploads" })),
        )
            .into_response();
    }

    // Find the single `file` field; anything else in the form is ignored
    let mut file = None;
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() != Some("file") {
                    continue;
                }
                let original_name = field.file_name().unwrap_or("unknown").to_string();
                let media_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                match field.bytes().await {
                    Ok(data) => {
                        file = Some((original_name, media_type, data));
                        break;
                    }
                    Err(e) => {
                        tracing::error!("Error reading upload field: {}", e);
                        return server_error("Error uploading file");
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                tracing::warn!("Malformed multipart request: {}", e);
                return client_error("No file uploaded");
            }
        }
    }

    let Some((original_name, media_type, data)) = file else {
        return client_error("No file uploaded");
    };

    if !uploads::is_image_media_type(&media_type) {
        return client_error("File must be an image");
    }

    if data.len() as u64 > state.config.uploads.max_upload_bytes() {
        return client_error("File too large");
    }

    match uploads::store_photo(state.store.as_ref(), &original_name, &media_type, &data) {
        Ok(receipt) => {
            state.upload_limiter.record_attempt(&rate_key);
            Json(receipt).into_response()
        }
        Err(e) => {
            tracing::error!("Error uploading file: {:#}", e);
            server_error("Error uploading file")
        }
    }
}

/// GET /api/photos
pub async fn list_photos(State(state): State<Arc<AppState>>) -> Response {
    match photos::list_photos(state.store.as_ref(), !state.production_mode) {
        Ok(photos) => Json(serde_json::json!({ "photos": photos })).into_response(),
        Err(e) => {
            tracing::error!("Error fetching photos: {:#}", e);
            server_error("Error fetching photos")
        }
    }
}

#[derive(Deserialize)]
pub struct PlaceholderParams {
    width: Option<String>,
    height: Option<String>,
    text: Option<String>,
    #[serde(rename = "bgColor")]
    bg_color: Option<String>,
    #[serde(rename = "textColor")]
    text_color: Option<String>,
}

/// GET /api/placeholder
pub async fn placeholder(Query(params): Query<PlaceholderParams>) -> Response {
    let spec = placeholder::PlaceholderSpec {
        width: placeholder::parse_dimension(params.width.as_deref(), placeholder::DEFAULT_WIDTH),
        height: placeholder::parse_dimension(params.height.as_deref(), placeholder::DEFAULT_HEIGHT),
        text: params
            .text
            .unwrap_or_else(|| placeholder::DEFAULT_TEXT.to_string()),
        bg_color: placeholder::parse_color(
            params.bg_color.as_deref(),
            placeholder::DEFAULT_BG_COLOR,
        ),
        text_color: placeholder::parse_color(
            params.text_color.as_deref(),
            placeholder::DEFAULT_TEXT_COLOR,
        ),
    };

    let svg = placeholder::render_svg(&spec);

    (
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "public, max-age=31536000, immutable"),
        ],
        svg,
    )
        .into_response()
}
