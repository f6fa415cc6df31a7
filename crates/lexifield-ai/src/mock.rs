//! Mock suggestion provider for testing
//!
//! Returns canned suggestions and descriptions without calling any model.
//! Useful for:
//! - Unit testing the validation merge policy
//! - Running the CLI offline (`--provider mock`)
//! - Simulating provider failures and latency
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lexifield_ai::{MockProvider, SuggestionProvider, SuggestionRequest};
//!
//! let provider = MockProvider::new().with_suggestion("customerEmail", "Clear and concise.");
//! let result = provider.suggest_field_name(&SuggestionRequest::new("email")).await?;
//! assert_eq!(provider.suggestion_calls().await, 1);
//! ```

use crate::provider::{
    DescriptionRequest, GeneratedDescription, GenerationError, SuggestionProvider,
    SuggestionRequest, SuggestionResult,
};
use std::sync::Arc;
use tokio::sync::RwLock;

/// What the mock answers to suggestion requests
#[derive(Debug, Clone)]
enum SuggestionMode {
    /// Always return this result
    Fixed(SuggestionResult),

    /// Return the name quoted in the description (`A field named '<name>'...`),
    /// or the whole description when nothing non-empty is quoted
    Echo,
}

/// Mock suggestion provider
///
/// Clones share recorded requests.
pub struct MockProvider {
    suggestion: SuggestionMode,

    description: GeneratedDescription,

    /// Error returned by every call, if set
    failure: Option<GenerationError>,

    /// Simulated latency (milliseconds)
    latency_ms: u64,

    suggestion_requests: Arc<RwLock<Vec<SuggestionRequest>>>,

    description_requests: Arc<RwLock<Vec<DescriptionRequest>>>,
}

impl MockProvider {
    /// Create a mock that echoes the quoted field name back with neutral reasoning
    pub fn new() -> Self {
        Self {
            suggestion: SuggestionMode::Echo,
            description: GeneratedDescription::new("A field in the API data dictionary."),
            failure: None,
            latency_ms: 0,
            suggestion_requests: Arc::new(RwLock::new(Vec::new())),
            description_requests: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Always answer suggestion requests with this name and reasoning
    pub fn with_suggestion(mut self, name: impl Into<String>, reasoning: impl Into<String>) -> Self {
        self.suggestion = SuggestionMode::Fixed(SuggestionResult::new(name, reasoning));
        self
    }

    /// Always answer description requests with this text
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = GeneratedDescription::new(description);
        self
    }

    /// Fail every call with this error
    pub fn with_failure(mut self, error: GenerationError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Delay every call by `latency_ms` milliseconds
    pub fn with_latency(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    /// Number of suggestion requests received
    pub async fn suggestion_calls(&self) -> usize {
        self.suggestion_requests.read().await.len()
    }

    /// All suggestion requests received, in order
    pub async fn suggestion_requests(&self) -> Vec<SuggestionRequest> {
        self.suggestion_requests.read().await.clone()
    }

    /// All description requests received, in order
    pub async fn description_requests(&self) -> Vec<DescriptionRequest> {
        self.description_requests.read().await.clone()
    }

    async fn simulate_latency(&self) {
        if self.latency_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.latency_ms)).await;
        }
    }
}

/// Extract `<name>` from `A field named '<name>'...`
fn quoted_name(description: &str) -> Option<&str> {
    let start = description.find('\'')? + 1;
    let len = description[start..].find('\'')?;
    Some(&description[start..start + len])
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MockProvider {
    fn clone(&self) -> Self {
        Self {
            suggestion: self.suggestion.clone(),
            description: self.description.clone(),
            failure: self.failure.clone(),
            latency_ms: self.latency_ms,
            suggestion_requests: Arc::clone(&self.suggestion_requests),
            description_requests: Arc::clone(&self.description_requests),
        }
    }
}

#[async_trait::async_trait]
impl SuggestionProvider for MockProvider {
    fn name(&self) -> &'static str {
        "Mock"
    }

    async fn suggest_field_name(
        &self,
        request: &SuggestionRequest,
    ) -> Result<SuggestionResult, GenerationError> {
        self.suggestion_requests.write().await.push(request.clone());
        self.simulate_latency().await;

        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        let result = match &self.suggestion {
            SuggestionMode::Fixed(result) => result.clone(),
            SuggestionMode::Echo => {
                let name = quoted_name(&request.description)
                    .filter(|name| !name.trim().is_empty())
                    .unwrap_or(&request.description);
                SuggestionResult::new(name, "The proposed name is clear and consistent with existing fields.")
            }
        };

        result.checked()
    }

    async fn generate_description(
        &self,
        request: &DescriptionRequest,
    ) -> Result<GeneratedDescription, GenerationError> {
        self.description_requests.write().await.push(request.clone());
        self.simulate_latency().await;

        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        self.description.clone().checked()
    }
}
