//! Cross-origin policy for the demo endpoints.

use std::time::Duration;

use axum::http::Method;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::Config;

/// Suffix matched by the optional Netlify deploy wildcard.
const NETLIFY_SUFFIX: &str = ".netlify.app";

/// Decide whether `origin` may call the service cross-origin.
///
/// An origin passes when it appears verbatim in the allow-list, or when
/// the wildcard flag is set and it is an HTTPS netlify.app subdomain.
pub fn origin_allowed(allowed: &[String], netlify_wildcard: bool, origin: &str) -> bool {
    if allowed.iter().any(|a| a == origin) {
        return true;
    }
    if !netlify_wildcard {
        return false;
    }
    origin
        .strip_prefix("https://")
        .map(|host| host.ends_with(NETLIFY_SUFFIX))
        .unwrap_or(false)
}

/// Build the CORS middleware from configuration.
///
/// Credentials stay disabled; request headers are unrestricted; browsers
/// may cache preflight results for ten minutes.
pub fn cors_layer(config: &Config) -> CorsLayer {
    let allowed = config.allowed_origins.clone();
    let netlify_wildcard = config.allow_netlify_wildcard;

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin, _request_parts| {
            origin
                .to_str()
                .map(|origin| origin_allowed(&allowed, netlify_wildcard, origin))
                .unwrap_or(false)
        }))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(600))
}
