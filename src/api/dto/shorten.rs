//! DTOs for link shortening endpoint.

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::application::services::Shortened;
use crate::error::AppError;

/// Request to shorten a URL.
///
/// `originalUrl` is optional at the serde level so a missing field is reported as
/// a validation error instead of a body rejection.
///
/// Extracted from a JSON body, or from an `application/x-www-form-urlencoded` body
/// when the request says so. Unreadable bodies are rejected with [`AppError`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    pub original_url: Option<String>,
}

impl<S> FromRequest<S> for ShortenRequest
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(payload) = Form::<ShortenRequest>::from_request(req, state)
                .await
                .map_err(|rejection| invalid_body(rejection.body_text()))?;
            Ok(payload)
        } else {
            let Json(payload) = Json::<ShortenRequest>::from_request(req, state)
                .await
                .map_err(|rejection| invalid_body(rejection.body_text()))?;
            Ok(payload)
        }
    }
}

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|content_type| content_type.starts_with(FORM_CONTENT_TYPE))
}

fn invalid_body(reason: String) -> AppError {
    AppError::bad_request("Invalid request body", json!({ "reason": reason }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: String,
    pub short_code: String,
}

impl From<Shortened> for ShortenResponse {
    fn from(shortened: Shortened) -> Self {
        Self {
            original_url: shortened.original_url,
            short_url: shortened.short_url,
            short_code: shortened.short_code,
        }
    }
}
