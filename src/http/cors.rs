//! CORS policy.
//!
//! Every origin, method and header is allowed, with credentials. Browsers
//! reject `*` together with credentials, so the policy mirrors the request's
//! origin, method and headers instead of answering with wildcards.

use std::time::Duration;

use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// How long browsers may cache a preflight result
const PREFLIGHT_MAX_AGE_SECS: u64 = 600;

pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .max_age(Duration::from_secs(PREFLIGHT_MAX_AGE_SECS))
}
