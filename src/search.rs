//! Brave Search API client
//!
//! Thin wrapper over the upstream web-search endpoint. The relay treats the
//! response as an opaque JSON document: it is forwarded to callers and
//! subscribers without interpreting its internal structure.

use std::time::Duration;

use crate::error::{RelayError, Result};

/// Default result count when the caller omits one
pub const DEFAULT_COUNT: i64 = 10;

/// Smallest result count the upstream API accepts
pub const MIN_COUNT: i64 = 1;

/// Largest result count the upstream API accepts
pub const MAX_COUNT: i64 = 20;

const BRAVE_SEARCH_ENDPOINT: &str = "https://api.search.brave.com/res/v1/web/search";

/// Clamp a requested result count into the range the upstream API accepts.
///
/// Any input is legal here, including negative, zero, and oversized values;
/// `None` falls back to [`DEFAULT_COUNT`].
pub fn clamp_count(count: Option<i64>) -> i64 {
    count.unwrap_or(DEFAULT_COUNT).clamp(MIN_COUNT, MAX_COUNT)
}

/// Client for the Brave Search web API
pub struct SearchClient {
    api_key: String,
    client: reqwest::Client,
    base_url: String,
}

impl SearchClient {
    /// Create a client against the production Brave endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, BRAVE_SEARCH_ENDPOINT)
    }

    /// Create a client against a specific endpoint (used by tests)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.into(),
        }
    }

    /// Run one web search and return the provider's JSON document.
    ///
    /// `count` must already be clamped via [`clamp_count`]; this method sends
    /// it as-is. A non-success status becomes [`RelayError::UpstreamStatus`]
    /// with the status code in its message.
    pub async fn web_search(&self, query: &str, count: i64) -> Result<serde_json::Value> {
        let count_param = count.to_string();
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", query), ("count", count_param.as_str())])
            .header("Accept", "application/json")
            .header("X-Subscription-Token", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_count_grid() {
        // (input, effective count sent upstream)
        let cases = [
            (Some(-5), 1),
            (Some(0), 1),
            (Some(1), 1),
            (Some(10), 10),
            (Some(20), 20),
            (Some(21), 20),
            (Some(1000), 20),
        ];
        for (input, expected) in cases {
            assert_eq!(clamp_count(input), expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_clamp_count_defaults_when_omitted() {
        assert_eq!(clamp_count(None), DEFAULT_COUNT);
    }

    #[test]
    fn test_upstream_status_message_carries_code() {
        let err = RelayError::UpstreamStatus { status: 503 };
        assert_eq!(err.to_string(), "Brave API error: 503");
    }
}
