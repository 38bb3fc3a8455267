use axum::body::Body;
use axum::extract::connect_info::MockConnectInfo;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use lone_traveler::services::store::MemoryUploadStore;
use lone_traveler::web::{self, AppState};
use lone_traveler::Config;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceExt;

const BOUNDARY: &str = "traveler-test-boundary";

fn test_config(max_upload_size: &str) -> Config {
    let raw = format!(
        r#"
[site]
title = "The Lone Traveler"
description = "A travel photography portfolio"
url = "http://localhost:3000"

[uploads]
dir = "./public/uploads"
max_upload_size = "{}"
"#,
        max_upload_size
    );
    toml::from_str(&raw).expect("test config should parse")
}

fn test_app(max_upload_size: &str) -> Router {
    let state = AppState::new(test_config(max_upload_size), false)
        .with_store(Arc::new(MemoryUploadStore::new()));

    web::app(Arc::new(state)).layer(MockConnectInfo(SocketAddr::from(([127, 0, 0, 1], 40000))))
}

fn multipart_body(field: &str, filename: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
            BOUNDARY, field, filename, content_type
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn upload_request(field: &str, filename: &str, content_type: &str, data: &[u8]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(multipart_body(field, filename, content_type, data)))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

mod upload_api_tests {
    use super::*;

    #[tokio::test]
    async fn test_upload_success_and_file_served_back() {
        let app = test_app("10MB");

        let response = app
            .clone()
            .oneshot(upload_request(
                "file",
                "Sunset In Bali.JPG",
                "image/jpeg",
                b"fake jpeg bytes",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["originalName"], "Sunset In Bali.JPG");
        assert_eq!(body["type"], "image/jpeg");
        assert_eq!(body["size"], 15);

        let file_path = body["filePath"].as_str().unwrap();
        assert!(file_path.starts_with("/uploads/"));

        let filename = body["filename"].as_str().unwrap();
        assert!(filename.starts_with("sunset-in-bali-"));
        assert!(filename.ends_with(".JPG"));

        // The stored file must be served back byte-identical
        let served = app.oneshot(get_request(file_path)).await.unwrap();
        assert_eq!(served.status(), StatusCode::OK);
        assert_eq!(body_bytes(served).await, b"fake jpeg bytes");
    }

    #[tokio::test]
    async fn test_upload_without_file_field_is_rejected() {
        let app = test_app("10MB");

        let response = app
            .oneshot(upload_request("avatar", "a.jpg", "image/jpeg", b"data"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "No file uploaded");
    }

    #[tokio::test]
    async fn test_upload_non_image_is_rejected() {
        let app = test_app("10MB");

        let response = app
            .oneshot(upload_request("file", "notes.txt", "text/plain", b"hello"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "File must be an image");
    }

    #[tokio::test]
    async fn test_upload_over_size_limit_is_rejected() {
        let app = test_app("1KB");

        let oversized = vec![0u8; 2048];
        let response = app
            .oneshot(upload_request("file", "big.jpg", "image/jpeg", &oversized))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "File too large");
    }

    #[tokio::test]
    async fn test_upload_same_name_twice_yields_distinct_files() {
        let app = test_app("10MB");

        let first = body_json(
            app.clone()
                .oneshot(upload_request("file", "sunset.jpg", "image/jpeg", b"one"))
                .await
                .unwrap(),
        )
        .await;
        let second = body_json(
            app.clone()
                .oneshot(upload_request("file", "sunset.jpg", "image/jpeg", b"two"))
                .await
                .unwrap(),
        )
        .await;

        assert_ne!(first["filename"], second["filename"]);
    }
}

mod photos_api_tests {
    use super::*;

    #[tokio::test]
    async fn test_photos_empty_store() {
        let app = test_app("10MB");

        let response = app.oneshot(get_request("/api/photos")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["photos"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_photos_after_upload() {
        let app = test_app("10MB");

        app.clone()
            .oneshot(upload_request(
                "file",
                "Sunset In Bali.JPG",
                "image/jpeg",
                b"jpeg",
            ))
            .await
            .unwrap();

        let response = app.oneshot(get_request("/api/photos")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let photos = body["photos"].as_array().unwrap();
        assert_eq!(photos.len(), 1);
        assert_eq!(photos[0]["id"], 1000);
        assert_eq!(photos[0]["title"], "Sunset In Bali");
        assert_eq!(photos[0]["location"], "Unknown Location");
        assert_eq!(photos[0]["width"], 1200);
        assert_eq!(photos[0]["height"], 800);
        assert!(photos[0]["image"]
            .as_str()
            .unwrap()
            .starts_with("/uploads/sunset-in-bali-"));
    }

    #[tokio::test]
    async fn test_serving_unknown_upload_is_not_found() {
        let app = test_app("10MB");

        let response = app.oneshot(get_request("/uploads/missing.jpg")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

mod placeholder_api_tests {
    use super::*;

    #[tokio::test]
    async fn test_placeholder_renders_svg_with_text() {
        let app = test_app("10MB");

        let response = app
            .oneshot(get_request("/api/placeholder?width=400&height=300&text=Test"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/svg+xml"
        );
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "public, max-age=31536000, immutable"
        );

        let svg = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(svg.contains("Test"));
        assert!(svg.contains("width=\"400\""));
        assert!(svg.contains("height=\"300\""));
    }

    #[tokio::test]
    async fn test_placeholder_defaults() {
        let app = test_app("10MB");

        let response = app.oneshot(get_request("/api/placeholder")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let svg = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(svg.contains("The Lone Traveler"));
        assert!(svg.contains("width=\"1200\""));
        assert!(svg.contains("fill=\"#3b82f6\""));
    }

    #[tokio::test]
    async fn test_placeholder_malformed_dimensions_fall_back() {
        let app = test_app("10MB");

        let response = app
            .oneshot(get_request("/api/placeholder?width=wide&height=-3"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let svg = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(svg.contains("width=\"1200\""));
        assert!(svg.contains("height=\"800\""));
    }
}
