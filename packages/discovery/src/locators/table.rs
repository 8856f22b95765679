//! Fixed per-town website table.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::error::{DiscoveryError, Result};
use crate::traits::locator::Locator;
use crate::types::town::Town;

/// Locator backed by a fixed table of known town websites.
///
/// A pure string mapping: deterministic and usable without network access.
/// Lookup keys are case-insensitive on the town's location string
/// ("springfield, vt").
#[derive(Debug, Clone, Default)]
pub struct TableLocator {
    entries: HashMap<String, String>,
}

impl TableLocator {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a town → URL entry (builder pattern).
    pub fn with_entry(mut self, town: &Town, url: impl Into<String>) -> Self {
        self.entries.insert(Self::key(town), url.into());
        self
    }

    /// Add a town → URL entry.
    pub fn insert(&mut self, town: &Town, url: impl Into<String>) {
        self.entries.insert(Self::key(town), url.into());
    }

    /// Number of known towns.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn key(town: &Town) -> String {
        town.location().to_lowercase()
    }
}

#[async_trait]
impl Locator for TableLocator {
    async fn locate(&self, town: &Town) -> Result<String> {
        self.entries
            .get(&Self::key(town))
            .cloned()
            .ok_or_else(|| DiscoveryError::Locate {
                town: town.location(),
                reason: "town is not in the site table".to_string(),
            })
    }

    fn name(&self) -> &str {
        "table"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_known_town_returns_exact_url() {
        let springfield = Town::new("Springfield");
        let locator =
            TableLocator::new().with_entry(&springfield, "https://springfield.example.gov");

        let url = locator.locate(&springfield).await.unwrap();
        assert_eq!(url, "https://springfield.example.gov");
    }

    #[tokio::test]
    async fn test_lookup_is_case_insensitive() {
        let locator = TableLocator::new()
            .with_entry(&Town::new("Cambridge").with_state("MA"), "https://cambridgema.gov");

        let url = locator
            .locate(&Town::new("cambridge").with_state("ma"))
            .await
            .unwrap();
        assert_eq!(url, "https://cambridgema.gov");
    }

    #[tokio::test]
    async fn test_unknown_town_is_locate_error() {
        let locator = TableLocator::new();
        let err = locator.locate(&Town::new("Nowhere")).await.unwrap_err();
        assert!(matches!(err, DiscoveryError::Locate { .. }));
    }
}
