pub mod filename;
pub mod image_url;
pub mod photos;
pub mod placeholder;
pub mod store;
pub mod uploads;
