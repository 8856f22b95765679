//! Locator trait for mapping a town to its official website.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::town::Town;

/// Maps a municipality to the URL believed to be its official website.
///
/// Implementations:
/// - `TableLocator` - fixed per-town table, deterministic, no network
/// - `ModelLocator` - asks the language model, as the production path does
///
/// No reachability check happens here; a wrong or dead URL surfaces as a
/// downstream fetch failure.
#[async_trait]
pub trait Locator: Send + Sync {
    /// Return the candidate official website URL for the town.
    async fn locate(&self, town: &Town) -> Result<String>;

    /// Get the locator name (for logging/debugging).
    fn name(&self) -> &str {
        "unknown"
    }
}
