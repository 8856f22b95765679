//! Testing utilities.
//!
//! A mock language model for exercising the pipeline without real API
//! calls. The mock fetcher lives in [`crate::fetchers::mock`].

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use crate::error::{DiscoveryError, Result};
use crate::traits::ai::LanguageModel;

/// Record of one call made to the mock model.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub system: String,
    pub user: String,
}

/// A mock language model returning queued canned answers.
///
/// Answers are consumed in FIFO order, one per `complete` call; when the
/// queue runs dry the default answer (if any) is returned. Every call is
/// recorded for assertions.
#[derive(Default)]
pub struct MockLanguageModel {
    responses: Arc<RwLock<VecDeque<String>>>,
    default_response: Arc<RwLock<Option<String>>>,
    calls: Arc<RwLock<Vec<RecordedCall>>>,
}

impl MockLanguageModel {
    /// Create a mock with no canned answers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a canned answer (builder pattern).
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses.write().unwrap().push_back(response.into());
        self
    }

    /// Set the answer used when the queue is empty (builder pattern).
    pub fn with_default_response(self, response: impl Into<String>) -> Self {
        *self.default_response.write().unwrap() = Some(response.into());
        self
    }

    /// Queue a canned answer.
    pub fn push_response(&self, response: impl Into<String>) {
        self.responses.write().unwrap().push_back(response.into());
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.read().unwrap().clone()
    }

    /// Get the number of calls made.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// The user prompt of the most recent call, if any.
    pub fn last_prompt(&self) -> Option<String> {
        self.calls.read().unwrap().last().map(|c| c.user.clone())
    }
}

impl Clone for MockLanguageModel {
    fn clone(&self) -> Self {
        Self {
            responses: Arc::clone(&self.responses),
            default_response: Arc::clone(&self.default_response),
            calls: Arc::clone(&self.calls),
        }
    }
}

#[async_trait]
impl LanguageModel for MockLanguageModel {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        self.calls.write().unwrap().push(RecordedCall {
            system: system.to_string(),
            user: user.to_string(),
        });

        if let Some(response) = self.responses.write().unwrap().pop_front() {
            return Ok(response);
        }

        self.default_response
            .read()
            .unwrap()
            .clone()
            .ok_or_else(|| DiscoveryError::Model("mock has no canned response".into()))
    }
}
