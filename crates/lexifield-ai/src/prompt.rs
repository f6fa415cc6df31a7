//! Prompt templates for the model provider
//!
//! Templates are rendered with the camelCase wire form of the request, so
//! optional sections only appear when the corresponding input was supplied.

use minijinja::Environment;
use serde::Serialize;
use crate::provider::{DescriptionRequest, GenerationError, SuggestionRequest};

const SUGGEST_FIELD_NAME_TEMPLATE: &str = r#"You are an expert data architect specializing in API design and naming conventions.

Your task is to suggest an API field name based on the provided description, while adhering to industry standards, best practices, and any specific framework requirements.

Description: {{ description }}
{% if existingFieldNames %}
Existing Field Names: {{ existingFieldNames | join(", ") }}
Consider these existing field names to maintain consistency and avoid conflicts.
{% endif %}{% if frameworkRequirements %}
Framework Requirements: {{ frameworkRequirements }}
Adhere to these framework requirements and industry standards when suggesting the field name.
{% endif %}
Provide a well-reasoned suggestion for the API field name and explain your reasoning.
Make sure the name adheres to common naming conventions such as camelCase or snake_case.
Ensure that the name is clear, concise, and meaningful.
Validate field names against existing APIs and cross-reference for consistency. For example, discern the term meaning of start_date, invoice_date, invoice_start_date, and original_invoice_date.
These field names can refer to the same term and definition as we need to check and validate them.

Respond with a single JSON object with exactly these string fields: "suggestedFieldName", "reasoning".
"#;

const GENERATE_DESCRIPTION_TEMPLATE: &str = r#"You are an expert compliance officer responsible for generating descriptions for API fields.

Your goal is to create descriptions that are clear, concise, and compliant with industry and regulatory standards, as well as any specific framework requirements.

Here are the details of the field:
Field Name: {{ fieldName }}
Field Details: {{ fieldDetails }}
{% if regulatoryRequirements %}Regulatory Requirements: {{ regulatoryRequirements }}
{% endif %}{% if frameworkRequirements %}Framework Requirements: {{ frameworkRequirements }}
{% endif %}
Generate a description for the field that meets these requirements.

Respond with a single JSON object with exactly this string field: "fieldDescription".
"#;

/// Renders provider prompts
pub struct PromptRenderer {
    env: Environment<'static>,
}

impl PromptRenderer {
    pub fn new() -> Self {
        Self {
            env: Environment::new(),
        }
    }

    /// Prompt asking for a field name suggestion
    pub fn suggest_field_name(&self, request: &SuggestionRequest) -> Result<String, GenerationError> {
        self.render(SUGGEST_FIELD_NAME_TEMPLATE, request)
    }

    /// Prompt asking for a field description
    pub fn generate_description(&self, request: &DescriptionRequest) -> Result<String, GenerationError> {
        self.render(GENERATE_DESCRIPTION_TEMPLATE, request)
    }

    fn render<S: Serialize>(&self, source: &str, ctx: S) -> Result<String, GenerationError> {
        self.env
            .render_str(source, ctx)
            .map_err(|e| GenerationError::Template(e.to_string()))
    }
}

impl Default for PromptRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_prompt_with_all_sections() {
        let renderer = PromptRenderer::new();
        let request = SuggestionRequest::new("A field named 'userId'.")
            .with_existing_names(["orderId", "customerName", "productSku"])
            .with_framework_requirements("JSON:API");

        let prompt = renderer.suggest_field_name(&request).unwrap();
        assert!(prompt.contains("Description: A field named 'userId'."));
        assert!(prompt.contains("Existing Field Names: orderId, customerName, productSku"));
        assert!(prompt.contains("Framework Requirements: JSON:API"));
        assert!(prompt.contains("\"suggestedFieldName\""));
    }

    #[test]
    fn suggestion_prompt_omits_missing_sections() {
        let renderer = PromptRenderer::new();
        let prompt = renderer
            .suggest_field_name(&SuggestionRequest::new("The invoice start date"))
            .unwrap();

        assert!(prompt.contains("Description: The invoice start date"));
        assert!(!prompt.contains("Existing Field Names"));
        assert!(!prompt.contains("Framework Requirements"));
    }

    #[test]
    fn description_prompt() {
        let renderer = PromptRenderer::new();
        let request = DescriptionRequest::new("userEmail", "Primary contact email, string")
            .with_regulatory_requirements("GDPR");

        let prompt = renderer.generate_description(&request).unwrap();
        assert!(prompt.contains("Field Name: userEmail"));
        assert!(prompt.contains("Field Details: Primary contact email, string"));
        assert!(prompt.contains("Regulatory Requirements: GDPR"));
        assert!(!prompt.contains("Framework Requirements"));
        assert!(prompt.contains("\"fieldDescription\""));
    }

    #[test]
    fn syntax_error_is_reported_as_template_error() {
        let renderer = PromptRenderer::new();
        let result = renderer.render("Description: {% if description %}", SuggestionRequest::new("x"));

        match result {
            Err(GenerationError::Template(message)) => {
                assert!(message.contains("syntax error"), "{}", message);
                assert!(!message.contains("not found"), "{}", message);
            }
            other => panic!("expected template error, got {:?}", other),
        }
    }

    #[test]
    fn user_text_is_not_html_escaped() {
        let renderer = PromptRenderer::new();
        let prompt = renderer
            .suggest_field_name(&SuggestionRequest::new("customer's <primary> email & phone"))
            .unwrap();
        assert!(prompt.contains("customer's <primary> email & phone"));
    }
}
