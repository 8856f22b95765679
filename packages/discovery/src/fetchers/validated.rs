//! Fetcher wrapper that validates URLs before fetching.

use async_trait::async_trait;
use tracing::warn;

use crate::error::{FetchError, FetchResult};
use crate::security::validate::UrlValidator;
use crate::traits::fetcher::Fetcher;
use crate::types::page::FetchedPage;

/// A fetcher that validates every URL before the inner fetcher sees it.
///
/// The site URL comes back from a language model and followed links come
/// from arbitrary page content, so production fetchers should always be
/// wrapped:
///
/// ```rust,ignore
/// let fetcher = ValidatedFetcher::new(HttpFetcher::new());
/// ```
pub struct ValidatedFetcher<F: Fetcher> {
    inner: F,
    validator: UrlValidator,
}

impl<F: Fetcher> ValidatedFetcher<F> {
    /// Create a new validated fetcher with default security rules.
    pub fn new(fetcher: F) -> Self {
        Self {
            inner: fetcher,
            validator: UrlValidator::new(),
        }
    }

    /// Create with a custom validator.
    pub fn with_validator(fetcher: F, validator: UrlValidator) -> Self {
        Self {
            inner: fetcher,
            validator,
        }
    }
}

#[async_trait]
impl<F: Fetcher> Fetcher for ValidatedFetcher<F> {
    async fn fetch_one(&self, url: &str) -> FetchResult<FetchedPage> {
        self.validator
            .validate_with_dns(url)
            .await
            .map_err(FetchError::Security)?;

        self.inner.fetch_one(url).await
    }

    async fn fetch_specific(&self, urls: &[String]) -> FetchResult<Vec<FetchedPage>> {
        let mut valid_urls = Vec::with_capacity(urls.len());
        for url in urls {
            if let Err(e) = self.validator.validate_with_dns(url).await {
                warn!("Skipping blocked URL {}: {}", url, e);
                continue;
            }
            valid_urls.push(url.clone());
        }

        if valid_urls.is_empty() {
            return Ok(Vec::new());
        }

        self.inner.fetch_specific(&valid_urls).await
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
