//! Fetcher trait for retrieving pages.

use async_trait::async_trait;

use crate::error::FetchResult;
use crate::types::page::FetchedPage;

/// Fetcher trait for retrieving raw pages over the network.
///
/// Implementations:
/// - `HttpFetcher` - plain HTTP GET via reqwest
/// - `MockFetcher` - canned pages for tests
///
/// Wrap URL-based fetchers with `ValidatedFetcher` so model-supplied URLs
/// are validated before any request goes out.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch a single URL.
    ///
    /// A network failure or non-success status is an error; there is no
    /// retry.
    async fn fetch_one(&self, url: &str) -> FetchResult<FetchedPage>;

    /// Fetch several specific URLs, skipping individual failures.
    ///
    /// Used for the follow-links step; may return fewer pages than
    /// requested.
    async fn fetch_specific(&self, urls: &[String]) -> FetchResult<Vec<FetchedPage>> {
        let mut pages = Vec::with_capacity(urls.len());
        for url in urls {
            match self.fetch_one(url).await {
                Ok(page) => pages.push(page),
                Err(e) => {
                    tracing::warn!("Failed to fetch {}: {}", url, e);
                }
            }
        }
        Ok(pages)
    }

    /// Get the fetcher name (for logging/debugging).
    fn name(&self) -> &str {
        "unknown"
    }
}
