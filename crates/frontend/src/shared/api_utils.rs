//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::config;

/// Get the base URL for API requests
///
/// # Returns
/// - The configured base like "http://127.0.0.1:5000"
/// - Empty string when requests go to the page's own origin
pub fn api_base() -> String {
    config().api_base.clone()
}

/// Build a full API URL from an endpoint path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/chat");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_origin() {
        assert_eq!(join_url("", "/chat"), "/chat");
        assert_eq!(join_url("", "debug/status"), "/debug/status");
    }

    #[test]
    fn test_explicit_base() {
        assert_eq!(
            join_url("http://127.0.0.1:5000/", "/process-documents"),
            "http://127.0.0.1:5000/process-documents"
        );
    }
}
