//! LanguageModel trait for hosted LLM calls.

use async_trait::async_trait;

use crate::error::Result;

/// A hosted language model that can answer a prompt.
///
/// Implementations wrap a specific provider (Anthropic, OpenAI, etc.) and
/// handle transport, authentication, and provider-specific payloads. The
/// pipeline only needs plain text completion; prompt construction and
/// answer parsing live in [`crate::pipeline`].
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Answer `user` under the given `system` instruction.
    ///
    /// Returns the model's raw text answer. Provider failures (auth, rate
    /// limit, network) surface as [`crate::error::DiscoveryError::Model`].
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}
