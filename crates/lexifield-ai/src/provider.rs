//! Suggestion provider trait and request/response types

use serde::{Deserialize, Serialize};

/// Request for a field name suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    /// What the field holds
    pub description: String,

    /// Names already in use, to keep consistent with and avoid clashing with
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub existing_field_names: Vec<String>,

    /// Framework requirements or industry standards to follow
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework_requirements: Option<String>,
}

impl SuggestionRequest {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            existing_field_names: Vec::new(),
            framework_requirements: None,
        }
    }

    pub fn with_existing_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.existing_field_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_framework_requirements(mut self, requirements: impl Into<String>) -> Self {
        self.framework_requirements = Some(requirements.into());
        self
    }
}

/// Suggested field name and the reasoning behind it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResult {
    pub suggested_field_name: String,
    pub reasoning: String,
}

impl SuggestionResult {
    pub fn new(suggested_field_name: impl Into<String>, reasoning: impl Into<String>) -> Self {
        Self {
            suggested_field_name: suggested_field_name.into(),
            reasoning: reasoning.into(),
        }
    }

    /// Reject responses with an empty name or empty reasoning
    pub fn checked(self) -> Result<Self, GenerationError> {
        if self.suggested_field_name.trim().is_empty() {
            return Err(GenerationError::InvalidResponse(
                "suggestedFieldName is empty".to_string(),
            ));
        }
        if self.reasoning.trim().is_empty() {
            return Err(GenerationError::InvalidResponse(
                "reasoning is empty".to_string(),
            ));
        }
        Ok(self)
    }
}

/// Request for a generated field description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionRequest {
    pub field_name: String,

    /// Purpose and data type of the field
    pub field_details: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regulatory_requirements: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework_requirements: Option<String>,
}

impl DescriptionRequest {
    pub fn new(field_name: impl Into<String>, field_details: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            field_details: field_details.into(),
            regulatory_requirements: None,
            framework_requirements: None,
        }
    }

    pub fn with_regulatory_requirements(mut self, requirements: impl Into<String>) -> Self {
        self.regulatory_requirements = Some(requirements.into());
        self
    }

    pub fn with_framework_requirements(mut self, requirements: impl Into<String>) -> Self {
        self.framework_requirements = Some(requirements.into());
        self
    }
}

/// A generated field description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedDescription {
    pub field_description: String,
}

impl GeneratedDescription {
    pub fn new(field_description: impl Into<String>) -> Self {
        Self {
            field_description: field_description.into(),
        }
    }

    /// Reject an empty description
    pub fn checked(self) -> Result<Self, GenerationError> {
        if self.field_description.trim().is_empty() {
            return Err(GenerationError::InvalidResponse(
                "fieldDescription is empty".to_string(),
            ));
        }
        Ok(self)
    }
}

/// Errors raised by a suggestion provider
///
/// Callers surface these as-is; providers never retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Provider returned {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Prompt template error: {0}")]
    Template(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Text-generation service that suggests field names and writes descriptions
#[async_trait::async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Get the provider name (e.g., "Gemini", "Mock")
    fn name(&self) -> &'static str;

    /// Suggest a field name for a description
    ///
    /// Makes at most one call to the backing service.
    async fn suggest_field_name(
        &self,
        request: &SuggestionRequest,
    ) -> Result<SuggestionResult, GenerationError>;

    /// Generate a clear, compliant description for a field
    async fn generate_description(
        &self,
        request: &DescriptionRequest,
    ) -> Result<GeneratedDescription, GenerationError>;
}

#[async_trait::async_trait]
impl<P: SuggestionProvider + ?Sized> SuggestionProvider for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn suggest_field_name(
        &self,
        request: &SuggestionRequest,
    ) -> Result<SuggestionResult, GenerationError> {
        (**self).suggest_field_name(request).await
    }

    async fn generate_description(
        &self,
        request: &DescriptionRequest,
    ) -> Result<GeneratedDescription, GenerationError> {
        (**self).generate_description(request).await
    }
}
