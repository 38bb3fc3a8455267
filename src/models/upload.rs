use serde::Serialize;
use std::path::Path;

/// One file currently on durable storage inside the uploads directory.
#[derive(Debug, Clone, Serialize)]
pub struct StoredImageFile {
    pub file_name: String,
    pub size_bytes: u64,
}

impl StoredImageFile {
    /// File extension, lower-cased, without the leading dot.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
    }
}

/// Response body returned to the client after a successful upload.
#[derive(Debug, Clone, Serialize)]
pub struct UploadReceipt {
    pub success: bool,
    #[serde(rename = "filePath")]
    pub file_path: String,
    pub filename: String,
    #[serde(rename = "originalName")]
    pub original_name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub media_type: String,
}
