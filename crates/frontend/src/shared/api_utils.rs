//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Get the API origin for the current window
///
/// Uses the page's protocol and hostname with the configured API port.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn window_api_base(port: u16) -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Path of a resource's list endpoint with an encoded query string
///
/// # Example
/// ```rust,ignore
/// let path = list_path("customer", "page=1&page_size=50");
/// assert_eq!(path, "/api/customer?page=1&page_size=50");
/// ```
pub fn list_path(resource: &str, query_string: &str) -> String {
    if query_string.is_empty() {
        format!("/api/{}", resource)
    } else {
        format!("/api/{}?{}", resource, query_string)
    }
}

/// Path of a mutation endpoint: `/api/{resource}/{action}`
pub fn mutation_path(resource: &str, action: &str) -> String {
    format!("/api/{}/{}", resource, action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_follow_the_api_layout() {
        assert_eq!(list_path("vendor", ""), "/api/vendor");
        assert_eq!(list_path("vendor", "page=2"), "/api/vendor?page=2");
        assert_eq!(mutation_path("vendor", "delete"), "/api/vendor/delete");
    }
}
