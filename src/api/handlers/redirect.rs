//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL and counts the visit.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Click Tracking
///
/// The counter is incremented in the store before the redirect is sent. If the
/// increment fails transiently the redirect still happens; the service logs the
/// lost click.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let resolved = state.shortener.redirect(&code).await?;

    Ok(Redirect::temporary(&resolved.mapping.original_url))
}
