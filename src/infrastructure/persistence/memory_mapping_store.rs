//! In-process implementation of the mapping store.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::{MappingStore, StoreError, UniqueKey};

/// Mapping store kept in process memory.
///
/// Both indexes sit behind one lock, so the uniqueness checks and the insert of
/// [`MappingStore::create`] happen as one step, as do the read and write of
/// [`MappingStore::increment_clicks`]. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryMappingStore {
    inner: RwLock<Indexes>,
}

#[derive(Default)]
struct Indexes {
    by_code: HashMap<String, UrlMapping>,
    /// original_url -> short_code
    by_url: HashMap<String, String>,
}

impl MemoryMappingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MappingStore for MemoryMappingStore {
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlMapping>, StoreError> {
        let inner = self.inner.read().await;

        Ok(inner
            .by_url
            .get(original_url)
            .and_then(|code| inner.by_code.get(code))
            .cloned())
    }

    async fn find_by_short_code(
        &self,
        short_code: &str,
    ) -> Result<Option<UrlMapping>, StoreError> {
        Ok(self.inner.read().await.by_code.get(short_code).cloned())
    }

    async fn create(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, StoreError> {
        let mut inner = self.inner.write().await;

        if inner.by_url.contains_key(&new_mapping.original_url) {
            return Err(StoreError::Duplicate(UniqueKey::OriginalUrl));
        }
        if inner.by_code.contains_key(&new_mapping.short_code) {
            return Err(StoreError::Duplicate(UniqueKey::ShortCode));
        }

        let mapping = UrlMapping::new(
            new_mapping.original_url,
            new_mapping.short_code,
            0,
            Utc::now(),
        );

        inner
            .by_url
            .insert(mapping.original_url.clone(), mapping.short_code.clone());
        inner
            .by_code
            .insert(mapping.short_code.clone(), mapping.clone());

        Ok(mapping)
    }

    async fn increment_clicks(&self, short_code: &str) -> Result<UrlMapping, StoreError> {
        let mut inner = self.inner.write().await;

        let mapping = inner
            .by_code
            .get_mut(short_code)
            .ok_or(StoreError::NotFound)?;
        mapping.clicks += 1;

        Ok(mapping.clone())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.inner.read().await.by_code.len() as i64)
    }
}
