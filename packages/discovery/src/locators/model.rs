//! Language-model-backed website locator.

use async_trait::async_trait;
use tracing::info;
use url::Url;

use crate::error::{DiscoveryError, Result};
use crate::pipeline::prompts;
use crate::traits::ai::LanguageModel;
use crate::traits::locator::Locator;
use crate::types::town::Town;

/// Asks the language model for a town's official government website.
///
/// One round-trip with a "return only the URL" prompt. The answer is
/// normalized (first line, quotes stripped, `https://` prepended when the
/// scheme is missing) and must parse as a URL; everything else is a
/// locate error.
pub struct ModelLocator<A> {
    model: A,
}

impl<A: LanguageModel> ModelLocator<A> {
    /// Create a locator over the given model.
    pub fn new(model: A) -> Self {
        Self { model }
    }
}

#[async_trait]
impl<A: LanguageModel> Locator for ModelLocator<A> {
    async fn locate(&self, town: &Town) -> Result<String> {
        let prompt = prompts::format_locate_prompt(town);
        let answer = self
            .model
            .complete(prompts::LOCATE_SYSTEM_PROMPT, &prompt)
            .await?;

        let candidate = answer
            .trim()
            .lines()
            .next()
            .unwrap_or("")
            .trim()
            .trim_matches(|c| c == '"' || c == '\'' || c == '<' || c == '>')
            .to_string();

        if candidate.is_empty() {
            return Err(DiscoveryError::Locate {
                town: town.location(),
                reason: "model returned no URL".to_string(),
            });
        }

        let url = if candidate.starts_with("http://") || candidate.starts_with("https://") {
            candidate
        } else {
            format!("https://{}", candidate)
        };

        if Url::parse(&url).is_err() {
            return Err(DiscoveryError::Locate {
                town: town.location(),
                reason: format!("model returned an unparseable URL: {}", url),
            });
        }

        info!(town = %town, url = %url, "Found website");
        Ok(url)
    }

    fn name(&self) -> &str {
        "model"
    }
}
