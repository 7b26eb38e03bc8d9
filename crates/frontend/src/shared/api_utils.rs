//! API utilities for frontend-backend communication.

/// Base URL for API requests, derived from the current window location.
/// The dashboard is served from the same origin as the API gateway.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path (should start with "/api/").
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// `Authorization` header value for an authenticated request.
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
