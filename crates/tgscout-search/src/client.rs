//! HTTP client for the Google Custom Search JSON API.
//!
//! Wraps `reqwest` with credential handling and typed response
//! deserialization. Every call is a single attempt: callers decide what a
//! failed page means.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::SearchError;
use crate::types::SearchPage;

const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Results requested per page; the API maximum.
pub const RESULTS_PER_PAGE: u32 = 10;

/// Client for the Custom Search JSON API.
///
/// Use [`CseClient::new`] for production or [`CseClient::with_endpoint`] to
/// point at a mock server in tests.
pub struct CseClient {
    client: Client,
    api_key: String,
    cx: String,
    endpoint: Url,
}

impl CseClient {
    /// Creates a new client pointed at the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, cx: &str, timeout_secs: u64) -> Result<Self, SearchError> {
        Self::with_endpoint(api_key, cx, timeout_secs, DEFAULT_ENDPOINT)
    }

    /// Creates a new client with a custom endpoint URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SearchError::InvalidBaseUrl`] if
    /// `endpoint` is not a valid URL.
    pub fn with_endpoint(
        api_key: &str,
        cx: &str,
        timeout_secs: u64,
        endpoint: &str,
    ) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("tgscout/0.1 (channel-discovery)")
            .build()?;

        let endpoint = Url::parse(endpoint).map_err(|e| SearchError::InvalidBaseUrl {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            cx: cx.to_owned(),
            endpoint,
        })
    }

    /// Fetches one page of results for `query`, starting at the 1-based
    /// result offset `start`.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Http`] on network failure.
    /// - [`SearchError::UnexpectedStatus`] on a non-2xx response (quota
    ///   exhaustion surfaces here as 429).
    /// - [`SearchError::Deserialize`] if the body is not the expected JSON.
    pub async fn search_page(&self, query: &str, start: u32) -> Result<SearchPage, SearchError> {
        let url = self.build_url(query, start);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.redacted(&url),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| SearchError::Deserialize {
            context: format!("search(query={query}, start={start})"),
            source: e,
        })
    }

    /// Builds the request URL with percent-encoded query parameters.
    fn build_url(&self, query: &str, start: u32) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("key", &self.api_key)
            .append_pair("cx", &self.cx)
            .append_pair("q", query)
            .append_pair("num", &RESULTS_PER_PAGE.to_string())
            .append_pair("start", &start.to_string());
        url
    }

    /// The request URL with the API key masked, for error messages.
    fn redacted(&self, url: &Url) -> String {
        url.as_str().replace(&self.api_key, "[redacted]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(endpoint: &str) -> CseClient {
        CseClient::with_endpoint("test-key", "test-cx", 30, endpoint)
            .expect("client construction should not fail")
    }

    #[test]
    fn build_url_constructs_correct_query_string() {
        let client = test_client("https://www.googleapis.com/customsearch/v1");
        let url = client.build_url("kpss pdf", 11);
        assert_eq!(
            url.as_str(),
            "https://www.googleapis.com/customsearch/v1?key=test-key&cx=test-cx&q=kpss+pdf&num=10&start=11"
        );
    }

    #[test]
    fn build_url_encodes_turkish_characters() {
        let client = test_client("https://www.googleapis.com/customsearch/v1");
        let url = client.build_url("çıkmış soru", 1);
        assert!(
            url.as_str().contains("q=%C3%A7%C4%B1km%C4%B1%C5%9F+soru"),
            "query param should be percent-encoded: {url}"
        );
    }

    #[test]
    fn redacted_masks_api_key() {
        let client = test_client("https://www.googleapis.com/customsearch/v1");
        let url = client.build_url("kitap", 1);
        let shown = client.redacted(&url);
        assert!(!shown.contains("test-key"), "{shown}");
        assert!(shown.contains("key=[redacted]"), "{shown}");
    }

    #[test]
    fn rejects_invalid_endpoint() {
        let result = CseClient::with_endpoint("k", "cx", 30, "not a url");
        assert!(matches!(result, Err(SearchError::InvalidBaseUrl { .. })));
    }
}
