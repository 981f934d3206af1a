//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

use super::config::ApiConfig;
use gloo_net::http::Request;

/// Get the base URL for API requests
///
/// Uses `api.base_url` when configured; otherwise the current window
/// location with the configured backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
pub fn api_base(api: &ApiConfig) -> String {
    let (protocol, hostname) = match web_sys::window() {
        Some(w) => {
            let location = w.location();
            (
                location.protocol().unwrap_or_else(|_| "http:".to_string()),
                location
                    .hostname()
                    .unwrap_or_else(|_| "127.0.0.1".to_string()),
            )
        }
        None => ("http:".to_string(), "127.0.0.1".to_string()),
    };
    api.base_for(&protocol, &hostname)
}

/// GET `url` and return the raw body.
///
/// The bearer token is attached when the session has one. Decoding is left
/// to `contracts::shared::fetch_boundary`.
pub async fn get_text(url: &str, access_token: Option<&str>) -> Result<String, String> {
    let mut request = Request::get(url).header("Accept", "application/json");
    if let Some(token) = access_token {
        request = request.header("Authorization", &format!("Bearer {}", token));
    }

    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}
