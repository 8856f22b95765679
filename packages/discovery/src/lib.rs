//! Municipal Meeting Discovery
//!
//! Given a town name, find the town's official government website, scrape
//! it, and extract structured meeting information (schedule, location,
//! agenda links) with a hosted language model.
//!
//! The pipeline is a single forward pass:
//!
//! ```text
//! town name → URL → HTML → filtered content → structured answer → report
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use discovery::{Anthropic, Discovery, HttpFetcher, ModelLocator, Town, ValidatedFetcher};
//!
//! let model = Anthropic::from_env()?;
//! let discovery = Discovery::new(
//!     ModelLocator::new(model.clone()),
//!     ValidatedFetcher::new(HttpFetcher::new()),
//!     model,
//! );
//!
//! let report = discovery.run(&Town::new("Cambridge").with_state("MA")).await?;
//! discovery::report::render(&report, &mut std::io::stdout().lock())?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Core trait abstractions (Locator, Fetcher, LanguageModel)
//! - [`types`] - Domain types (Town, FetchedPage, MeetingDetails)
//! - [`content`] - Heuristic HTML filtering
//! - [`locators`] - Locator implementations (TableLocator, ModelLocator)
//! - [`fetchers`] - Fetcher implementations (HttpFetcher, MockFetcher)
//! - [`ai`] - Language model providers (Anthropic)
//! - [`pipeline`] - Prompts and pipeline orchestration
//! - [`report`] - Plain-text presentation
//! - [`security`] - Credential handling and outbound URL validation
//! - [`testing`] - Mock language model for tests

pub mod ai;
pub mod content;
pub mod error;
pub mod fetchers;
pub mod locators;
pub mod pipeline;
pub mod report;
pub mod security;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{
    DiscoveryError, FetchError, FetchResult, Result, SecurityError, SecurityResult,
};
pub use traits::{ai::LanguageModel, fetcher::Fetcher, locator::Locator};
pub use types::{
    meeting::{AgendaFormat, AgendaInfo, MeetingDetails, MeetingReport},
    page::FetchedPage,
    town::{is_valid_state_code, Town},
};

// Re-export components
pub use ai::Anthropic;
pub use content::{filter_html, FilteredContent, PageLink};
pub use fetchers::{HttpFetcher, MockFailure, MockFetcher, ValidatedFetcher};
pub use locators::{ModelLocator, TableLocator};
pub use pipeline::{parse_details, Discovery, DiscoveryConfig};
pub use report::render;
pub use security::{ModelCredentials, SecretString, UrlValidator};
pub use testing::MockLanguageModel;
