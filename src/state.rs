//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{ShortenerService, ShortenerSettings};
use crate::domain::repositories::MappingStore;

/// Shortener service over whichever store backend was configured.
pub type SharedShortener = Arc<ShortenerService<dyn MappingStore>>;

#[derive(Clone)]
pub struct AppState {
    pub shortener: SharedShortener,
}

impl AppState {
    pub fn new(shortener: SharedShortener) -> Self {
        Self { shortener }
    }

    /// Builds the state around a store handle.
    pub fn from_store(store: Arc<dyn MappingStore>, settings: ShortenerSettings) -> Self {
        Self::new(Arc::new(ShortenerService::new(store, settings)))
    }
}
