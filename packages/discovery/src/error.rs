//! Typed errors for the discovery library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can tell
//! which pipeline step failed.

use thiserror::Error;

/// Errors that can occur while discovering meeting information.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// No website URL could be determined for the town
    #[error("could not locate a website for {town}: {reason}")]
    Locate { town: String, reason: String },

    /// Page fetch failed
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Filtering the landing page produced no usable text
    #[error("no usable content at {url}")]
    EmptyContent { url: String },

    /// Language model call failed (auth, rate limit, network)
    #[error("language model error: {0}")]
    Model(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Model answer did not parse as the expected structure
    #[error("model answer did not match the expected structure: {reason}")]
    MalformedAnswer { reason: String },

    /// Configuration error
    #[error("config error: {0}")]
    Config(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors that can occur fetching a page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Security validation failed
    #[error("security error: {0}")]
    Security(#[from] SecurityError),

    /// HTTP transport failure
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Non-success response status
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// Invalid URL format
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },
}

/// Security-related errors for outbound URL validation.
#[derive(Debug, Error)]
pub enum SecurityError {
    /// URL scheme not allowed (e.g., file://, ftp://)
    #[error("disallowed URL scheme: {0}")]
    DisallowedScheme(String),

    /// Host is blocked (e.g., localhost, internal IPs)
    #[error("blocked host: {0}")]
    BlockedHost(String),

    /// IP in blocked CIDR range (e.g., 10.0.0.0/8)
    #[error("blocked IP range: {0}")]
    BlockedCidr(String),

    /// URL has no host
    #[error("URL has no host")]
    NoHost,

    /// DNS resolution failed
    #[error("DNS resolution failed: {0}")]
    DnsResolution(String),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias for discovery operations.
pub type Result<T> = std::result::Result<T, DiscoveryError>;

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Result type alias for security operations.
pub type SecurityResult<T> = std::result::Result<T, SecurityError>;
