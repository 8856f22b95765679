//! Raw page content as returned by a fetcher.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fetched page before content filtering.
///
/// Holds the raw response body plus the response metadata the pipeline
/// cares about. Discarded once the content filter has run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedPage {
    /// URL the fetch was issued for
    pub url: String,

    /// Raw response body
    pub html: String,

    /// HTTP status code
    pub status: u16,

    /// Content type from the response headers, if present
    pub content_type: Option<String>,

    /// Final URL after redirects, when it differs from `url`
    pub final_url: Option<String>,

    /// When the page was fetched
    pub fetched_at: DateTime<Utc>,
}

impl FetchedPage {
    /// Create a new fetched page with minimal fields.
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            html: html.into(),
            status: 200,
            content_type: None,
            final_url: None,
            fetched_at: Utc::now(),
        }
    }

    /// Set the HTTP status.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Set the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Set the final URL after redirects.
    pub fn with_final_url(mut self, final_url: impl Into<String>) -> Self {
        self.final_url = Some(final_url.into());
        self
    }

    /// Check if this page has a non-blank body.
    pub fn has_content(&self) -> bool {
        !self.html.trim().is_empty()
    }

    /// The URL links on this page should be resolved against.
    pub fn base_url(&self) -> &str {
        self.final_url.as_deref().unwrap_or(&self.url)
    }
}
