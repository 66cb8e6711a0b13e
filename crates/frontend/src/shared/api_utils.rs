//! API utilities for the satellite catalog endpoint
//!
//! The catalog is served by a third-party REST API. The base URL is fixed at
//! build time and can be overridden with the `SATELLITES_API_BASE` environment
//! variable, e.g. `SATELLITES_API_BASE=http://localhost:8080 trunk serve`.

const DEFAULT_API_BASE: &str = "https://backend.digantara.dev";

/// Path of the catalog listing, relative to the API base
pub const SATELLITES_PATH: &str = "/v1/satellites";

/// Get the base URL for API requests (no trailing slash)
pub fn api_base() -> &'static str {
    let base = option_env!("SATELLITES_API_BASE").unwrap_or(DEFAULT_API_BASE);
    base.trim_end_matches('/')
}

/// Build the catalog URL from an already encoded query string
///
/// # Example
/// ```ignore
/// let url = satellites_url("attributes=name");
/// // "https://backend.digantara.dev/v1/satellites?attributes=name"
/// ```
pub fn satellites_url(query: &str) -> String {
    if query.is_empty() {
        format!("{}{}", api_base(), SATELLITES_PATH)
    } else {
        format!("{}{}?{}", api_base(), SATELLITES_PATH, query)
    }
}
