//! Pipeline orchestration.
//!
//! One forward pass: locate → fetch → filter → follow meeting links →
//! synthesize → report. Strictly sequential; the first failing step
//! terminates the run.

use std::collections::HashSet;
use tracing::{debug, info};

use crate::content::{filter_html, FilteredContent};
use crate::error::{DiscoveryError, Result};
use crate::pipeline::prompts;
use crate::traits::{ai::LanguageModel, fetcher::Fetcher, locator::Locator};
use crate::types::meeting::{MeetingDetails, MeetingReport};
use crate::types::town::Town;

/// Tuning knobs for a discovery run.
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// How many meeting-related links to follow from the landing page.
    pub max_follow_links: usize,

    /// Per-page text budget (bytes) in the synthesis prompt.
    pub max_page_chars: usize,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            max_follow_links: 3,
            max_page_chars: 8000,
        }
    }
}

impl DiscoveryConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many meeting-related links to follow.
    pub fn with_max_follow_links(mut self, max: usize) -> Self {
        self.max_follow_links = max;
        self
    }

    /// Set the per-page text budget.
    pub fn with_max_page_chars(mut self, max: usize) -> Self {
        self.max_page_chars = max;
        self
    }
}

/// The meeting discovery pipeline.
///
/// Wires a [`Locator`], a [`Fetcher`], and a [`LanguageModel`] into the
/// single forward pass described in the crate docs.
pub struct Discovery<L, F, A> {
    locator: L,
    fetcher: F,
    model: A,
    config: DiscoveryConfig,
}

impl<L, F, A> Discovery<L, F, A>
where
    L: Locator,
    F: Fetcher,
    A: LanguageModel,
{
    /// Create a pipeline with the default config.
    pub fn new(locator: L, fetcher: F, model: A) -> Self {
        Self {
            locator,
            fetcher,
            model,
            config: DiscoveryConfig::default(),
        }
    }

    /// Override the config.
    pub fn with_config(mut self, config: DiscoveryConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the full pipeline for one town.
    pub async fn run(&self, town: &Town) -> Result<MeetingReport> {
        info!(town = %town, locator = self.locator.name(), "Locating official website");
        let website = self.locator.locate(town).await?;

        info!(url = %website, "Fetching landing page");
        let landing = self.fetcher.fetch_one(&website).await?;
        let filtered = filter_html(&landing.html, landing.base_url());

        if filtered.is_empty() {
            return Err(DiscoveryError::EmptyContent { url: website });
        }

        let mut pages: Vec<(String, FilteredContent)> = Vec::new();
        let follow = self.select_follow_links(&website, &filtered);
        pages.push((landing.url.clone(), filtered));

        if !follow.is_empty() {
            debug!(count = follow.len(), "Fetching meeting-related links");
            let extra = self.fetcher.fetch_specific(&follow).await?;
            for page in extra {
                let content = filter_html(&page.html, page.base_url());
                if !content.is_empty() {
                    pages.push((page.url.clone(), content));
                }
            }
        }

        info!(pages = pages.len(), "Synthesizing meeting details");
        let prompt = prompts::format_synthesize_prompt(town, &pages, self.config.max_page_chars);
        let answer = self
            .model
            .complete(prompts::SYNTHESIZE_SYSTEM_PROMPT, &prompt)
            .await?;

        let details = parse_details(&answer)?;

        Ok(MeetingReport {
            town: town.clone(),
            website,
            pages_consulted: pages.into_iter().map(|(url, _)| url).collect(),
            details,
        })
    }

    /// Pick up to `max_follow_links` distinct meeting-related links,
    /// skipping the landing page itself.
    fn select_follow_links(&self, website: &str, filtered: &FilteredContent) -> Vec<String> {
        let mut seen = HashSet::new();
        seen.insert(website.trim_end_matches('/').to_string());

        filtered
            .meeting_links()
            .into_iter()
            .filter(|link| seen.insert(link.url.trim_end_matches('/').to_string()))
            .take(self.config.max_follow_links)
            .map(|link| link.url.clone())
            .collect()
    }
}

/// Parse the model's JSON answer into [`MeetingDetails`].
///
/// Tolerates a markdown code fence around the JSON; anything else that
/// fails to parse is a [`DiscoveryError::MalformedAnswer`].
pub fn parse_details(answer: &str) -> Result<MeetingDetails> {
    serde_json::from_str(answer)
        .or_else(|_| {
            let json_str = answer
                .trim()
                .trim_start_matches("```json")
                .trim_start_matches("```")
                .trim_end_matches("```")
                .trim();
            serde_json::from_str(json_str)
        })
        .map_err(|e| DiscoveryError::MalformedAnswer {
            reason: e.to_string(),
        })
}
