use crate::models::PhotoRecord;
use crate::services::image_url;
use crate::services::store::UploadStore;
use crate::services::{filename, uploads};
use anyhow::Result;
use std::path::Path;

/// Extensions recognized as images when scanning the uploads directory.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "svg"];

/// Uploaded photos get ids from 1000 upward so they never collide with the
/// statically-defined sample photos on the front end.
pub const UPLOAD_ID_OFFSET: i64 = 1000;

const DEFAULT_WIDTH: u32 = 1200;
const DEFAULT_HEIGHT: u32 = 800;
const UNKNOWN_LOCATION: &str = "Unknown Location";
const UNKNOWN_CAMERA: &str = "Unknown Camera";

/// Rebuild display records for every stored image. Records follow
/// enumeration order; ids are recomputed from array position on every call
/// and are not durable identifiers.
pub fn list_photos(store: &dyn UploadStore, dev_mode: bool) -> Result<Vec<PhotoRecord>> {
    let files = store.list()?;

    // No metadata is persisted, so date is "now" rather than upload time
    let date = chrono::Utc::now().format("%B %Y").to_string();

    let photos = files
        .iter()
        .filter(|f| {
            f.extension()
                .map(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
                .unwrap_or(false)
        })
        .enumerate()
        .map(|(index, file)| {
            let id = UPLOAD_ID_OFFSET + index as i64;

            let stem = Path::new(&file.file_name)
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("");
            let mut title = filename::title_from_stem(stem);
            if title.is_empty() {
                title = format!("Uploaded Photo {}", id);
            }

            let path = format!("{}/{}", uploads::PUBLIC_PREFIX, file.file_name);
            let image =
                image_url::resolve_image_url(&path, None, None, Some(title.as_str()), dev_mode);

            PhotoRecord {
                id,
                description: format!("Uploaded photo: {}", title),
                title,
                location: UNKNOWN_LOCATION.to_string(),
                date: date.clone(),
                camera: UNKNOWN_CAMERA.to_string(),
                image,
                width: DEFAULT_WIDTH,
                height: DEFAULT_HEIGHT,
            }
        })
        .collect();

    Ok(photos)
}
