//! HTTP API Client
//!
//! Functions for communicating with the Biodash REST API. The dashboard
//! performs exactly one fetch: the full sample document at startup. There is
//! no retry and no caching; a failure leaves the dashboard unpopulated.

use gloo_net::http::Request;

use crate::model::Dataset;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8083/api/v1";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("biodash_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

/// Structured error body returned by the API
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: ApiErrorBody,
    #[serde(default)]
    pub request_id: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

// ============ API Functions ============

/// Fetch the full sample document
pub async fn fetch_dataset() -> Result<Dataset, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/dataset", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let message = match response.json::<ApiError>().await {
            Ok(err) => err.error.message,
            Err(_) => format!("HTTP {}", response.status()),
        };
        return Err(message);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
