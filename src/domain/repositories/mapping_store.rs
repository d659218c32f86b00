//! Store contract for short-code mappings.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use async_trait::async_trait;
use std::fmt;

/// Uniqueness constraint that rejected an insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueKey {
    OriginalUrl,
    ShortCode,
}

impl fmt::Display for UniqueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniqueKey::OriginalUrl => f.write_str("original_url"),
            UniqueKey::ShortCode => f.write_str("short_code"),
        }
    }
}

/// Errors reported by a [`MappingStore`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// An insert violated the uniqueness of `original_url` or `short_code`.
    #[error("duplicate key on {0}")]
    Duplicate(UniqueKey),

    /// No record matches the given short code.
    #[error("mapping not found")]
    NotFound,

    /// The backing store could not be reached or did not answer in time.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Durable access to [`UrlMapping`] records, keyed by original URL or short code.
///
/// Implementations are the only source of durable mutation in the service and
/// must enforce both uniqueness constraints and the atomicity of
/// [`MappingStore::increment_clicks`] themselves.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingStore`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryMappingStore`] - in-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingStore: Send + Sync {
    /// Finds a mapping by its exact original URL.
    ///
    /// No normalization is applied: `http://x.com` and `http://x.com/` are
    /// different keys.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the store cannot be queried.
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlMapping>, StoreError>;

    /// Finds a mapping by its exact short code.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the store cannot be queried.
    async fn find_by_short_code(
        &self,
        short_code: &str,
    ) -> Result<Option<UrlMapping>, StoreError>;

    /// Inserts a new mapping with `clicks = 0` and `created_at = now`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Duplicate`] naming the violated key when either the
    /// original URL or the short code already exists.
    /// Returns [`StoreError::Unavailable`] when the store cannot be written.
    async fn create(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, StoreError>;

    /// Atomically adds one to the click counter and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has this short code.
    /// Returns [`StoreError::Unavailable`] when the store cannot be written.
    async fn increment_clicks(&self, short_code: &str) -> Result<UrlMapping, StoreError>;

    /// Checks that the store answers requests.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Returns the number of stored mappings.
    async fn count(&self) -> Result<i64, StoreError>;
}
