//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Statistics for a single short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub original_url: String,
    pub short_url: String,
    pub short_code: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}
