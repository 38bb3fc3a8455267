use crate::services::store::{FsUploadStore, UploadStore};
use crate::web::security::RateLimiter;
use crate::Config;
use std::sync::Arc;

pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn UploadStore>,
    pub production_mode: bool,
    pub upload_limiter: Arc<RateLimiter>,
}

impl AppState {
    pub fn new(config: Config, production_mode: bool) -> Self {
        let store = Arc::new(FsUploadStore::new(&config.uploads.dir));

        Self {
            config,
            store,
            production_mode,
            upload_limiter: Arc::new(RateLimiter::default()),
        }
    }

    /// Swap the storage backend, e.g. for an in-memory store in tests.
    pub fn with_store(mut self, store: Arc<dyn UploadStore>) -> Self {
        self.store = store;
        self
    }
}
