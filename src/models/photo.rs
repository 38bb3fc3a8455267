use serde::Serialize;

/// Display record for one photo in the gallery. Rebuilt from the stored
/// file name on every listing request; `id` is only stable within a single
/// response.
#[derive(Debug, Clone, Serialize)]
pub struct PhotoRecord {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: String,
    pub camera: String,
    pub image: String,
    pub width: u32,
    pub height: u32,
}
