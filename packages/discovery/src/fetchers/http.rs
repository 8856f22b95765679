//! HTTP fetcher implementation.
//!
//! One synchronous-looking GET per page: no retry, no redirect handling
//! beyond what reqwest does by default.

use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{FetchError, FetchResult};
use crate::traits::fetcher::Fetcher;
use crate::types::page::FetchedPage;

/// Browser-like user agent; many municipal sites refuse obvious bots.
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Fetcher that issues plain HTTP GETs via reqwest.
///
/// # Example
///
/// ```rust,ignore
/// use discovery::fetchers::{HttpFetcher, ValidatedFetcher};
///
/// let fetcher = ValidatedFetcher::new(HttpFetcher::new());
/// let page = fetcher.fetch_one("https://example.gov").await?;
/// ```
pub struct HttpFetcher {
    client: reqwest::Client,
    user_agent: String,
    rate_limit_ms: u64,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    /// Create a new HTTP fetcher with a 10 second request timeout.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(10))
    }

    /// Create a fetcher with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            rate_limit_ms: 100,
        }
    }

    /// Set a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a custom HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Set the delay between requests in `fetch_specific` (milliseconds).
    pub fn with_rate_limit(mut self, ms: u64) -> Self {
        self.rate_limit_ms = ms;
        self
    }

    async fn get(&self, url: &str) -> FetchResult<FetchedPage> {
        debug!(url = %url, "HTTP fetch starting");
        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "HTTP request failed");
                FetchError::Http(Box::new(e))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        // Capture final URL after redirects
        let final_url = response.url().to_string();

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let html = response
            .text()
            .await
            .map_err(|e| FetchError::Http(Box::new(e)))?;

        debug!(url = %url, content_length = html.len(), "Page fetched successfully");

        let mut page = FetchedPage {
            url: url.to_string(),
            html,
            status: status.as_u16(),
            content_type,
            final_url: None,
            fetched_at: Utc::now(),
        };
        if final_url != page.url {
            page = page.with_final_url(final_url);
        }

        Ok(page)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_one(&self, url: &str) -> FetchResult<FetchedPage> {
        self.get(url).await
    }

    async fn fetch_specific(&self, urls: &[String]) -> FetchResult<Vec<FetchedPage>> {
        let mut pages = Vec::with_capacity(urls.len());

        for url in urls {
            match self.get(url).await {
                Ok(page) => pages.push(page),
                Err(e) => {
                    warn!("Failed to fetch {}: {}", url, e);
                }
            }

            // Rate limiting
            if self.rate_limit_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.rate_limit_ms)).await;
            }
        }

        Ok(pages)
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides() {
        let fetcher = HttpFetcher::new()
            .with_user_agent("CivicMeetBot/1.0")
            .with_rate_limit(0);

        assert_eq!(fetcher.user_agent, "CivicMeetBot/1.0");
        assert_eq!(fetcher.rate_limit_ms, 0);
        assert_eq!(fetcher.name(), "http");
    }
}
