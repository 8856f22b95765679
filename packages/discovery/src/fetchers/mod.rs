//! Fetcher implementations.

pub mod http;
pub mod mock;
pub mod validated;

pub use http::HttpFetcher;
pub use mock::{MockFailure, MockFetcher};
pub use validated::ValidatedFetcher;
