//! Cross-origin resource sharing middleware.

use tower_http::cors::{Any, CorsLayer};

/// Creates a permissive CORS layer.
///
/// Any origin may call the API; no credentials are involved since the service has
/// no authentication.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
