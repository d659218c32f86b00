//! DTOs for the service banner.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
    pub endpoints: Endpoints,
}

/// Public endpoints, formatted as `METHOD path`.
#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub shorten: &'static str,
    pub stats: &'static str,
    pub redirect: &'static str,
}
