use tower_http::cors::{Any, CorsLayer};

/// Permissive cross-origin policy, applied to the whole router so error
/// responses carry the headers too.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
