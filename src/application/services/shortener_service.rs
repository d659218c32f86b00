//! Short code allocation, deduplication and redirect counting.

use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::{MappingStore, StoreError, UniqueKey};
use crate::utils::code_generator::generate_code;
use crate::utils::url_validator::{ValidationError, validate_url};

/// Default number of inserts attempted before giving up on code generation.
pub const DEFAULT_MAX_CODE_ATTEMPTS: usize = 5;

/// Errors returned by [`ShortenerService`].
///
/// Only [`ShortenerError::Validation`] and [`ShortenerError::NotFound`] are caused by
/// the caller. Store-level duplicate keys are resolved inside the service and never
/// appear here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortenerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no mapping for short code '{code}'")]
    NotFound { code: String },

    #[error("no free short code after {attempts} attempts")]
    Capacity { attempts: usize },

    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

/// Settings passed to the service at construction.
#[derive(Debug, Clone)]
pub struct ShortenerSettings {
    /// Public prefix of short links, e.g. `https://s.example.com`.
    pub base_url: String,
    /// Upper bound on inserts tried when generated codes collide.
    pub max_code_attempts: usize,
}

impl ShortenerSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            max_code_attempts: DEFAULT_MAX_CODE_ATTEMPTS,
        }
    }

    pub fn with_max_code_attempts(mut self, attempts: usize) -> Self {
        self.max_code_attempts = attempts;
        self
    }
}

/// Result of [`ShortenerService::shorten`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortened {
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
    /// `false` when an existing mapping was returned.
    pub created: bool,
}

/// Which flavour of lookup [`ShortenerService::resolve`] performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveMode {
    /// Lookup only.
    Stats,
    /// Lookup followed by a click increment.
    Redirect,
}

/// Result of [`ShortenerService::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub mapping: UrlMapping,
    /// `true` when this call advanced the click counter.
    pub click_recorded: bool,
}

/// Service for creating and resolving short links.
///
/// Holds no state besides the store handle and its settings. All coordination
/// between concurrent requests is delegated to the store's uniqueness constraints
/// and atomic increment.
pub struct ShortenerService<S: MappingStore + ?Sized> {
    store: Arc<S>,
    settings: ShortenerSettings,
}

impl<S: MappingStore + ?Sized> ShortenerService<S> {
    /// Creates a new shortener service.
    pub fn new(store: Arc<S>, settings: ShortenerSettings) -> Self {
        Self { store, settings }
    }

    /// Returns the underlying store handle.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Builds the public short link for a code.
    pub fn short_url(&self, short_code: &str) -> String {
        format!(
            "{}/{}",
            self.settings.base_url.trim_end_matches('/'),
            short_code
        )
    }

    /// Returns the short link for `original_url`, creating the mapping on first use.
    ///
    /// # Deduplication
    ///
    /// Repeated submissions of the same string return the existing mapping. When two
    /// requests race to create the same URL, the loser's insert is rejected on the
    /// `original_url` constraint and it returns the winner's mapping instead.
    ///
    /// # Code Generation
    ///
    /// Random 7-character codes. A collision on `short_code` triggers a fresh code,
    /// up to `max_code_attempts` inserts in total.
    ///
    /// # Errors
    ///
    /// - [`ShortenerError::Validation`] for an empty or non-absolute URL
    /// - [`ShortenerError::Capacity`] when every attempted code collided
    /// - [`ShortenerError::StoreUnavailable`] when the store fails
    pub async fn shorten(&self, original_url: &str) -> Result<Shortened, ShortenerError> {
        validate_url(original_url)?;

        if let Some(existing) = self
            .store
            .find_by_original_url(original_url)
            .await
            .map_err(store_failure)?
        {
            tracing::debug!(code = %existing.short_code, "Returning existing mapping");
            return Ok(self.shortened(existing, false));
        }

        let attempts = self.settings.max_code_attempts;

        for attempt in 1..=attempts {
            let new_mapping = NewUrlMapping::new(original_url, generate_code());

            match self.store.create(new_mapping).await {
                Ok(mapping) => {
                    tracing::info!(code = %mapping.short_code, "Created short link");
                    return Ok(self.shortened(mapping, true));
                }
                Err(StoreError::Duplicate(UniqueKey::ShortCode)) => {
                    tracing::warn!(attempt, "Short code collision, retrying");
                }
                Err(StoreError::Duplicate(UniqueKey::OriginalUrl)) => {
                    tracing::warn!("Concurrent insert for the same URL, reading winner");
                    return self.read_existing(original_url).await;
                }
                Err(e) => return Err(store_failure(e)),
            }
        }

        Err(ShortenerError::Capacity { attempts })
    }

    /// Looks up a short code, incrementing its counter in [`ResolveMode::Redirect`].
    ///
    /// A transient failure of the increment does not fail the redirect: the mapping
    /// read before the increment is returned with `click_recorded = false` and the
    /// failure is logged.
    ///
    /// # Errors
    ///
    /// - [`ShortenerError::NotFound`] if no mapping has this code
    /// - [`ShortenerError::StoreUnavailable`] if the lookup itself fails
    pub async fn resolve(
        &self,
        short_code: &str,
        mode: ResolveMode,
    ) -> Result<Resolved, ShortenerError> {
        let mapping = self
            .store
            .find_by_short_code(short_code)
            .await
            .map_err(store_failure)?
            .ok_or_else(|| not_found(short_code))?;

        if mode == ResolveMode::Stats {
            return Ok(Resolved {
                mapping,
                click_recorded: false,
            });
        }

        match self.store.increment_clicks(short_code).await {
            Ok(updated) => Ok(Resolved {
                mapping: updated,
                click_recorded: true,
            }),
            Err(StoreError::NotFound) => Err(not_found(short_code)),
            Err(e) => {
                tracing::warn!(code = %short_code, error = %e, "Click not recorded");
                Ok(Resolved {
                    mapping,
                    click_recorded: false,
                })
            }
        }
    }

    /// Returns the mapping for a code without touching its counter.
    pub async fn stats(&self, short_code: &str) -> Result<UrlMapping, ShortenerError> {
        self.resolve(short_code, ResolveMode::Stats)
            .await
            .map(|resolved| resolved.mapping)
    }

    /// Returns the redirect target for a code and counts the visit.
    pub async fn redirect(&self, short_code: &str) -> Result<Resolved, ShortenerError> {
        self.resolve(short_code, ResolveMode::Redirect).await
    }

    async fn read_existing(&self, original_url: &str) -> Result<Shortened, ShortenerError> {
        self.store
            .find_by_original_url(original_url)
            .await
            .map_err(store_failure)?
            .map(|mapping| self.shortened(mapping, false))
            .ok_or_else(|| {
                ShortenerError::StoreUnavailable(
                    "mapping rejected as duplicate but not readable".to_string(),
                )
            })
    }

    fn shortened(&self, mapping: UrlMapping, created: bool) -> Shortened {
        Shortened {
            short_url: self.short_url(&mapping.short_code),
            original_url: mapping.original_url,
            short_code: mapping.short_code,
            created,
        }
    }
}

fn not_found(short_code: &str) -> ShortenerError {
    ShortenerError::NotFound {
        code: short_code.to_string(),
    }
}

/// Maps store errors on paths where duplicates and missing records are unexpected.
fn store_failure(e: StoreError) -> ShortenerError {
    ShortenerError::StoreUnavailable(e.to_string())
}
