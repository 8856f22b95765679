//! Mock fetcher for testing.
//!
//! Canned pages and canned failures, with call recording.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{FetchError, FetchResult};
use crate::traits::fetcher::Fetcher;
use crate::types::page::FetchedPage;

/// How a canned URL should fail.
#[derive(Debug, Clone, Copy)]
pub enum MockFailure {
    /// Respond with a non-success HTTP status
    Status(u16),

    /// Simulate a connection-level failure
    Connect,
}

/// Mock fetcher for testing.
///
/// # Example
///
/// ```rust
/// use discovery::fetchers::MockFetcher;
/// use discovery::types::page::FetchedPage;
///
/// let mock = MockFetcher::new()
///     .with_page(FetchedPage::new("https://example.gov", "<main>hello</main>"));
/// ```
#[derive(Default)]
pub struct MockFetcher {
    /// Canned pages indexed by URL
    pages: Arc<RwLock<HashMap<String, FetchedPage>>>,

    /// Canned failures indexed by URL
    failures: Arc<RwLock<HashMap<String, MockFailure>>>,

    /// URLs requested via fetch_one, in order
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    /// Create a new empty mock fetcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page that will be returned for its URL.
    pub fn add_page(&self, page: FetchedPage) {
        self.pages.write().unwrap().insert(page.url.clone(), page);
    }

    /// Add a page (builder pattern).
    pub fn with_page(self, page: FetchedPage) -> Self {
        self.add_page(page);
        self
    }

    /// Add a canned page from URL and body (builder pattern).
    pub fn with_html(self, url: &str, html: &str) -> Self {
        self.add_page(FetchedPage::new(url, html));
        self
    }

    /// Make a URL fail with the given failure (builder pattern).
    pub fn with_failure(self, url: impl Into<String>, failure: MockFailure) -> Self {
        self.failures.write().unwrap().insert(url.into(), failure);
        self
    }

    /// Get the URLs requested via fetch_one, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Get the number of fetch_one calls.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

impl Clone for MockFetcher {
    fn clone(&self) -> Self {
        Self {
            pages: Arc::clone(&self.pages),
            failures: Arc::clone(&self.failures),
            calls: Arc::clone(&self.calls),
        }
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch_one(&self, url: &str) -> FetchResult<FetchedPage> {
        self.calls.write().unwrap().push(url.to_string());

        if let Some(failure) = self.failures.read().unwrap().get(url) {
            return match failure {
                MockFailure::Status(status) => Err(FetchError::Status {
                    status: *status,
                    url: url.to_string(),
                }),
                MockFailure::Connect => Err(FetchError::Http(
                    format!("connection refused: {}", url).into(),
                )),
            };
        }

        self.pages
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Http(format!("no canned page for {}", url).into()))
    }

    fn name(&self) -> &str {
        "mock"
    }
}
