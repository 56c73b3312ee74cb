//! Shared HTTP Client
//!
//! One [`ApiClient`] is built at bootstrap and provided to the whole view
//! tree through Leptos context. It carries the base path every request is
//! prefixed with and the default headers applied to POST bodies.

use gloo_net::http::{Request, Response};

/// Default API base path.
pub const DEFAULT_API_BASE: &str = "/api/v1";

const API_BASE_STORAGE_KEY: &str = "starchat_api_url";
const CONTENT_TYPE: &str = "content-type";

/// Shared HTTP client configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base: String,
    post_headers: Vec<(String, String)>,
}

impl ApiClient {
    /// Create a client with the given base path. Trailing slashes are
    /// normalized away; POST requests default to a JSON content type.
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            post_headers: vec![(CONTENT_TYPE.to_string(), "application/json".to_string())],
        }
    }

    /// Build the client from the browser environment: local storage override
    /// if present, [`DEFAULT_API_BASE`] otherwise.
    pub fn from_window() -> Self {
        let base = stored_api_base().unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        Self::new(&base)
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Default headers applied to POST requests.
    pub fn post_headers(&self) -> &[(String, String)] {
        &self.post_headers
    }

    /// Replace (or add) a default POST header.
    pub fn with_post_header(mut self, name: &str, value: &str) -> Self {
        let name = name.to_ascii_lowercase();
        match self.post_headers.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.post_headers.push((name, value.to_string())),
        }
        self
    }

    /// Join a request path against the base prefix.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base, path)
        } else {
            format!("{}/{}", self.base, path)
        }
    }

    /// Issue a GET request.
    pub async fn get(&self, path: &str) -> Result<Response, String> {
        Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))
    }

    /// Issue a POST request with a JSON-serialized body and the client's
    /// default POST headers.
    pub async fn post_json<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, String> {
        let payload =
            serde_json::to_string(body).map_err(|e| format!("Request build error: {}", e))?;

        let mut builder = Request::post(&self.url(path));
        for (name, value) in &self.post_headers {
            builder = builder.header(name, value);
        }

        builder
            .body(payload)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))
    }
}

/// Read the API base override from local storage.
fn stored_api_base() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(API_BASE_STORAGE_KEY).ok()?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_path_is_prefixed_with_base() {
        let client = ApiClient::new("/api");
        assert_eq!(client.url("/x"), "/api/x");
    }

    #[test]
    fn test_trailing_slash_on_base_is_normalized() {
        let client = ApiClient::new("http://localhost:8080/api/v1/");
        assert_eq!(client.base(), "http://localhost:8080/api/v1");
        assert_eq!(client.url("/stars"), "http://localhost:8080/api/v1/stars");
    }

    #[test]
    fn test_relative_path_gets_a_separator() {
        let client = ApiClient::new("/api/v1");
        assert_eq!(client.url("stars"), "/api/v1/stars");
    }

    #[test]
    fn test_post_defaults_to_json_content_type() {
        let client = ApiClient::new(DEFAULT_API_BASE);
        assert!(client
            .post_headers()
            .iter()
            .any(|(name, value)| name == "content-type" && value == "application/json"));
    }

    #[test]
    fn test_post_header_override_replaces_default() {
        let client = ApiClient::new(DEFAULT_API_BASE)
            .with_post_header("Content-Type", "text/plain");
        let content_types: Vec<_> = client
            .post_headers()
            .iter()
            .filter(|(name, _)| name == "content-type")
            .collect();
        assert_eq!(content_types.len(), 1);
        assert_eq!(content_types[0].1, "text/plain");
    }
}
