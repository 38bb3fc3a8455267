use std::path::Path;

pub const DEFAULT_WIDTH: u32 = 1200;
pub const DEFAULT_HEIGHT: u32 = 800;

const FALLBACK_LABEL: &str = "Image";
const LOCAL_ASSET_PREFIX: &str = "/images/";

/// Decide what URL to render for a logical image path. Pure function: no
/// I/O, no existence check.
///
/// External URLs pass through unchanged. In development mode, local asset
/// paths under `/images/` are rewritten to the placeholder endpoint so the
/// site renders without the real photo library on disk. Everything else
/// (including `/uploads/` paths) passes through.
pub fn resolve_image_url(
    path: &str,
    width: Option<u32>,
    height: Option<u32>,
    label: Option<&str>,
    dev_mode: bool,
) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }

    if dev_mode && path.starts_with(LOCAL_ASSET_PREFIX) {
        let width = width.unwrap_or(DEFAULT_WIDTH);
        let height = height.unwrap_or(DEFAULT_HEIGHT);
        let label = label
            .map(str::to_string)
            .or_else(|| label_from_path(path))
            .unwrap_or_else(|| FALLBACK_LABEL.to_string());
        return format!(
            "/api/placeholder?width={}&height={}&text={}",
            width, height, label
        );
    }

    path.to_string()
}

/// URL for a standalone placeholder image with explicit colors.
pub fn placeholder_url(
    width: u32,
    height: u32,
    text: &str,
    bg_color: &str,
    text_color: &str,
) -> String {
    format!(
        "/api/placeholder?width={}&height={}&text={}&bgColor={}&textColor={}",
        width, height, text, bg_color, text_color
    )
}

fn label_from_path(path: &str) -> Option<String> {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
