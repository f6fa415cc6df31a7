//! Validation verdicts

use serde::{Deserialize, Serialize};

/// Verdict severity level
///
/// Ordered `Info < Success < Warning < Error`. A validation pass only ever
/// moves severity upwards through [`Severity::escalate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, never produced by a validation pass
    Info,

    /// All checks passed
    Success,

    /// Should be reviewed but not blocking
    Warning,

    /// Critical issue
    Error,
}

impl Severity {
    /// Raise severity to at least `floor`; never lowers it
    #[must_use]
    pub fn escalate(self, floor: Severity) -> Severity {
        self.max(floor)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Success => write!(f, "success"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Outcome of validating one candidate field name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationVerdict {
    /// The candidate name that was validated
    pub field_name: String,

    /// Final severity
    pub severity: Severity,

    /// Summary message selected by severity
    pub message: String,

    /// Ordered detail lines (rule violations first, then collaborator notes)
    pub details: Vec<String>,

    /// Alternative name offered by the suggestion collaborator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative: Option<String>,
}

impl ValidationVerdict {
    /// Create a verdict with no details
    pub fn new(field_name: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            severity,
            message: message.into(),
            details: Vec::new(),
            alternative: None,
        }
    }

    /// Set detail lines
    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }

    /// Set the alternative name
    pub fn with_alternative(mut self, alternative: impl Into<String>) -> Self {
        self.alternative = Some(alternative.into());
        self
    }

    pub fn is_success(&self) -> bool {
        self.severity == Severity::Success
    }

    pub fn has_errors(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ordering() {
        assert!(Severity::Info < Severity::Success);
        assert!(Severity::Success < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn escalate_never_downgrades() {
        assert_eq!(Severity::Success.escalate(Severity::Warning), Severity::Warning);
        assert_eq!(Severity::Error.escalate(Severity::Warning), Severity::Error);
        assert_eq!(Severity::Warning.escalate(Severity::Success), Severity::Warning);
    }

    #[test]
    fn verdict_serialization() {
        let verdict = ValidationVerdict::new("userId", Severity::Success, "'userId' passes all checks.");
        let json = serde_json::to_string(&verdict).unwrap();

        assert!(json.contains("\"success\""));
        assert!(!json.contains("alternative"));
        assert!(verdict.is_success());
        assert!(!verdict.has_errors());
    }
}
