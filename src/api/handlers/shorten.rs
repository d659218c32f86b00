//! Handler for link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL, or returns the existing one.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "originalUrl": "https://example.com/page" }
/// ```
///
/// or the form-encoded equivalent, `originalUrl=https%3A%2F%2Fexample.com%2Fpage`.
///
/// # Response
///
/// `201 Created` for a new mapping, `200 OK` when the URL was already shortened.
///
/// ```json
/// {
///   "originalUrl": "https://example.com/page",
///   "shortUrl": "http://localhost:3000/aB3_x-9",
///   "shortCode": "aB3_x-9"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is unreadable, or the URL is missing or not
/// an absolute URL.
/// Returns 503 Service Unavailable if the store fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: ShortenRequest,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let original_url = payload.original_url.unwrap_or_default();

    let shortened = state.shortener.shorten(&original_url).await?;

    let status = if shortened.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(shortened.into())))
}
