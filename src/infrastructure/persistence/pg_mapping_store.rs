//! PostgreSQL implementation of the mapping store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::{MappingStore, StoreError, UniqueKey};

const ORIGINAL_URL_CONSTRAINT: &str = "url_mappings_original_url_key";
const SHORT_CODE_CONSTRAINT: &str = "url_mappings_short_code_key";

/// Default upper bound for a single store call.
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(5);

/// PostgreSQL store for URL mappings.
///
/// Both uniqueness rules are table constraints, so concurrent inserts are
/// arbitrated by the database. Click increments are a single `UPDATE` statement.
/// Every call is bounded by `operation_timeout`.
pub struct PgMappingStore {
    pool: Arc<PgPool>,
    operation_timeout: Duration,
}

#[derive(sqlx::FromRow)]
struct UrlMappingRow {
    original_url: String,
    short_code: String,
    clicks: i64,
    created_at: DateTime<Utc>,
}

impl From<UrlMappingRow> for UrlMapping {
    fn from(row: UrlMappingRow) -> Self {
        UrlMapping::new(row.original_url, row.short_code, row.clicks, row.created_at)
    }
}

impl PgMappingStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self {
            pool,
            operation_timeout: DEFAULT_OPERATION_TIMEOUT,
        }
    }

    pub fn with_operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout = timeout;
        self
    }

    async fn bounded<T, F>(&self, query: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.operation_timeout, query).await {
            Ok(result) => result.map_err(map_sqlx_error),
            Err(_) => Err(StoreError::Unavailable(format!(
                "operation timed out after {}ms",
                self.operation_timeout.as_millis()
            ))),
        }
    }
}

#[async_trait]
impl MappingStore for PgMappingStore {
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlMapping>, StoreError> {
        // md5() lets the lookup use the unique index.
        let row = self
            .bounded(
                sqlx::query_as::<_, UrlMappingRow>(
                    r#"
                    SELECT original_url, short_code, clicks, created_at
                    FROM url_mappings
                    WHERE md5(original_url) = md5($1) AND original_url = $1
                    "#,
                )
                .bind(original_url)
                .fetch_optional(self.pool.as_ref()),
            )
            .await?;

        Ok(row.map(UrlMapping::from))
    }

    async fn find_by_short_code(
        &self,
        short_code: &str,
    ) -> Result<Option<UrlMapping>, StoreError> {
        let row = self
            .bounded(
                sqlx::query_as::<_, UrlMappingRow>(
                    r#"
                    SELECT original_url, short_code, clicks, created_at
                    FROM url_mappings
                    WHERE short_code = $1
                    "#,
                )
                .bind(short_code)
                .fetch_optional(self.pool.as_ref()),
            )
            .await?;

        Ok(row.map(UrlMapping::from))
    }

    async fn create(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, StoreError> {
        let row = self
            .bounded(
                sqlx::query_as::<_, UrlMappingRow>(
                    r#"
                    INSERT INTO url_mappings (original_url, short_code)
                    VALUES ($1, $2)
                    RETURNING original_url, short_code, clicks, created_at
                    "#,
                )
                .bind(&new_mapping.original_url)
                .bind(&new_mapping.short_code)
                .fetch_one(self.pool.as_ref()),
            )
            .await?;

        Ok(row.into())
    }

    async fn increment_clicks(&self, short_code: &str) -> Result<UrlMapping, StoreError> {
        let row = self
            .bounded(
                sqlx::query_as::<_, UrlMappingRow>(
                    r#"
                    UPDATE url_mappings
                    SET clicks = clicks + 1
                    WHERE short_code = $1
                    RETURNING original_url, short_code, clicks, created_at
                    "#,
                )
                .bind(short_code)
                .fetch_optional(self.pool.as_ref()),
            )
            .await?;

        row.map(UrlMapping::from).ok_or(StoreError::NotFound)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.bounded(sqlx::query("SELECT 1").execute(self.pool.as_ref()))
            .await
            .map(|_| ())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        self.bounded(
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url_mappings")
                .fetch_one(self.pool.as_ref()),
        )
        .await
    }
}

/// Translates SQLx errors into store errors.
///
/// Unique violations are attributed to the violated constraint; everything else is
/// reported as the store being unavailable.
fn map_sqlx_error(e: sqlx::Error) -> StoreError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        match db.constraint() {
            Some(ORIGINAL_URL_CONSTRAINT) => {
                return StoreError::Duplicate(UniqueKey::OriginalUrl);
            }
            Some(SHORT_CODE_CONSTRAINT) => {
                return StoreError::Duplicate(UniqueKey::ShortCode);
            }
            _ => {}
        }
    }

    tracing::error!(error = %e, "Database error");
    StoreError::Unavailable(e.to_string())
}
