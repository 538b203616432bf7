//! API utilities for frontend-backend communication

/// Port the API server listens on, next to the page's own host
pub const API_PORT: u16 = 3000;

/// Base URL for API requests, e.g. "https://admin.example.org:3000".
///
/// Taken from the current window location; empty when there is no window
/// (so paths stay relative).
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_for(&protocol, &hostname)
}

fn base_for(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Full API URL for a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_for() {
        assert_eq!(base_for("https:", "admin.example.org"), "https://admin.example.org:3000");
        assert_eq!(base_for("http:", "127.0.0.1"), "http://127.0.0.1:3000");
    }
}
