//! Field name validation
//!
//! Merges the local naming rules with one cross-check by the suggestion
//! provider into a single verdict. Severity only ever escalates during a pass:
//!
//! 1. local rules set the initial severity (Error for reserved words,
//!    Warning for any other violation, Success otherwise)
//! 2. a materially different suggested name raises it to at least Warning
//! 3. reasoning mentioning a conflict or ambiguity raises it to at least Warning
//!
//! A provider failure fails the whole validation; no partial verdict is built.

use lexifield_ai::{GenerationError, SuggestionProvider, SuggestionRequest};
use lexifield_core::{Config, Severity, ValidationSettings, ValidationVerdict};
use crate::naming::NamingRuleSet;

/// Reasoning keywords that flag a concern, matched case-insensitively
const CONCERN_KEYWORDS: [&str; 2] = ["conflict", "ambiguous"];

/// Validates candidate field names
pub struct FieldValidator<P> {
    rules: NamingRuleSet,
    settings: ValidationSettings,
    provider: P,
}

impl<P: SuggestionProvider> FieldValidator<P> {
    /// Create a validator with default conventions and settings
    pub fn new(provider: P) -> Self {
        Self {
            rules: NamingRuleSet::default(),
            settings: ValidationSettings::default(),
            provider,
        }
    }

    /// Create a validator from loaded configuration
    pub fn from_config(config: &Config, provider: P) -> Self {
        Self {
            rules: NamingRuleSet::new(config.naming.clone()),
            settings: config.validation.clone(),
            provider,
        }
    }

    pub fn with_rules(mut self, rules: NamingRuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_settings(mut self, settings: ValidationSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn rules(&self) -> &NamingRuleSet {
        &self.rules
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Validate one candidate name
    pub async fn validate(&self, name: &str) -> Result<ValidationVerdict, GenerationError> {
        let violations = self.rules.check(name);
        let mut severity = violations
            .iter()
            .fold(Severity::Success, |acc, v| acc.escalate(v.severity()));
        let mut details: Vec<String> = violations.into_iter().map(|v| v.message).collect();

        tracing::debug!(field = name, violations = details.len(), %severity, "local naming rules checked");

        let request = self.cross_check_request(name);
        let suggestion = self.provider.suggest_field_name(&request).await.map_err(|e| {
            tracing::warn!(field = name, provider = self.provider.name(), error = %e, "suggestion provider failed");
            e
        })?;

        let mut alternative = None;

        if materially_different(name, &suggestion.suggested_field_name) {
            details.push(format!(
                "Suggestion: consider '{}'. Reasoning: {}",
                suggestion.suggested_field_name, suggestion.reasoning
            ));
            alternative = Some(suggestion.suggested_field_name.clone());
            severity = severity.escalate(Severity::Warning);
        }

        if raises_concern(&suggestion.reasoning) {
            details.push(format!("Concern: {}", suggestion.reasoning));
            severity = severity.escalate(Severity::Warning);
        }

        tracing::info!(field = name, %severity, "field name validated");

        let mut verdict = ValidationVerdict::new(name, severity, verdict_message(name, severity))
            .with_details(details);
        if let Some(alternative) = alternative {
            verdict = verdict.with_alternative(alternative);
        }

        Ok(verdict)
    }

    fn cross_check_request(&self, name: &str) -> SuggestionRequest {
        let mut request = SuggestionRequest::new(cross_check_description(name))
            .with_existing_names(self.settings.existing_field_names.iter().cloned());
        if let Some(requirements) = &self.settings.framework_requirements {
            request = request.with_framework_requirements(requirements.clone());
        }
        request
    }
}

/// Description sent to the provider when cross-checking a name
pub fn cross_check_description(name: &str) -> String {
    format!(
        "A field named '{}'. Check for potential conflicts or suggest improvements.",
        name
    )
}

/// True when neither name contains the other, ignoring case
pub fn materially_different(candidate: &str, suggested: &str) -> bool {
    let candidate = candidate.to_lowercase();
    let suggested = suggested.to_lowercase();

    candidate != suggested && !candidate.contains(&suggested) && !suggested.contains(&candidate)
}

fn raises_concern(reasoning: &str) -> bool {
    let reasoning = reasoning.to_lowercase();
    CONCERN_KEYWORDS.iter().any(|keyword| reasoning.contains(keyword))
}

fn verdict_message(name: &str, severity: Severity) -> String {
    match severity {
        Severity::Success => format!("'{}' passes all checks.", name),
        Severity::Warning => format!("'{}' has some warnings.", name),
        Severity::Error => format!("'{}' has critical issues.", name),
        Severity::Info => format!("Validation checks performed for '{}'.", name),
    }
}
