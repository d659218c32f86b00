//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the mapping and click count for a short code.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// Does not count as a visit.
///
/// # Response
///
/// ```json
/// {
///   "originalUrl": "https://example.com/page",
///   "shortUrl": "http://localhost:3000/aB3_x-9",
///   "shortCode": "aB3_x-9",
///   "clicks": 12,
///   "createdAt": "2025-01-01T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let mapping = state.shortener.stats(&code).await?;

    Ok(Json(StatsResponse {
        short_url: state.shortener.short_url(&mapping.short_code),
        original_url: mapping.original_url,
        short_code: mapping.short_code,
        clicks: mapping.clicks,
        created_at: mapping.created_at,
    }))
}
