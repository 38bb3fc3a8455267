use crate::models::UploadReceipt;
use crate::services::filename;
use crate::services::store::UploadStore;
use anyhow::Result;

pub const PUBLIC_PREFIX: &str = "/uploads";

const IMAGE_TYPE_PREFIX: &str = "image/";

/// The upload endpoint only checks the declared media type; the bytes are
/// never inspected.
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with(IMAGE_TYPE_PREFIX)
}

/// Persist an already-validated upload under a fresh collision-resistant
/// name and describe the result. Input validation (presence, media type,
/// size limit) happens at the handler boundary.
pub fn store_photo(
    store: &dyn UploadStore,
    original_name: &str,
    media_type: &str,
    data: &[u8],
) -> Result<UploadReceipt> {
    let stored_name = filename::unique_file_name(original_name);
    store.put(&stored_name, data)?;

    Ok(UploadReceipt {
        success: true,
        file_path: format!("{}/{}", PUBLIC_PREFIX, stored_name),
        filename: stored_name,
        original_name: original_name.to_string(),
        size: data.len() as u64,
        media_type: media_type.to_string(),
    })
}
