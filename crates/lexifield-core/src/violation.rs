//! Naming rule violations
//!
//! IMPORTANT: Violation codes are stable.
//! NEVER rename or remove codes - they appear in exported reports.
//! Add new codes with new names only.

use serde::{Deserialize, Serialize};
use crate::verdict::Severity;

/// Kind of naming rule that a field name broke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationKind {
    /// Name is not lower camel case
    CaseConvention,

    /// Name is longer than the configured maximum
    MaxLength,

    /// Name is a reserved word
    ReservedWord,
}

impl ViolationKind {
    /// Get the violation kind as a stable string identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CaseConvention => "CASE_CONVENTION",
            Self::MaxLength => "MAX_LENGTH",
            Self::ReservedWord => "RESERVED_WORD",
        }
    }

    /// Severity this kind of violation contributes to a verdict
    pub fn severity(&self) -> Severity {
        match self {
            Self::CaseConvention | Self::MaxLength => Severity::Warning,
            Self::ReservedWord => Severity::Error,
        }
    }
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single broken naming rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleViolation {
    /// Which rule was broken
    pub kind: ViolationKind,

    /// Human-readable message
    pub message: String,
}

impl RuleViolation {
    pub fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Severity contribution of this violation
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }
}
