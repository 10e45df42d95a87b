//! API utilities for frontend-backend communication
//!
//! The widget is served by the same backend that answers its requests, so
//! the API lives on the page's own origin.

/// Get the base URL for API requests
///
/// # Returns
/// - Origin of the current page like "http://localhost:5000"
/// - Empty string if window is not available (relative URLs are used then)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/generate-item-details");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
