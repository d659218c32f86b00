//! Handler for the service banner.

use axum::Json;

use crate::api::dto::index::{Endpoints, IndexResponse};

/// Describes the service and its public endpoints.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "TinyURL API is running",
        endpoints: Endpoints {
            shorten: "POST /api/shorten",
            stats: "GET /api/stats/:shortCode",
            redirect: "GET /:shortCode",
        },
    })
}
