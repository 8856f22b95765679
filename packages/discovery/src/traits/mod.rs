//! Core trait abstractions.

pub mod ai;
pub mod fetcher;
pub mod locator;

pub use ai::LanguageModel;
pub use fetcher::Fetcher;
pub use locator::Locator;
