//! Validation report schema (stable v1)
//!
//! This schema is STABLE and VERSIONED.
//! Breaking changes require a new version.

use serde::{Deserialize, Serialize};
use crate::verdict::{Severity, ValidationVerdict};

/// Report schema version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportVersion {
    /// Major version (breaking changes)
    pub major: u32,

    /// Minor version (backward-compatible additions)
    pub minor: u32,
}

impl ReportVersion {
    /// Current report schema version
    pub const CURRENT: ReportVersion = ReportVersion { major: 1, minor: 0 };
}

impl std::fmt::Display for ReportVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Summary statistics for a report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Number of names validated
    pub total: usize,

    /// Names that passed all checks
    pub passed: usize,

    /// Names with warnings
    pub warnings: usize,

    /// Names with critical issues
    pub errors: usize,
}

/// Batch validation report (report.json v1)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Schema version
    pub version: ReportVersion,

    /// Timestamp (ISO 8601)
    pub timestamp: String,

    /// Summary statistics
    pub summary: ReportSummary,

    /// One verdict per validated name, in input order
    pub verdicts: Vec<ValidationVerdict>,
}

impl ValidationReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self {
            version: ReportVersion::CURRENT,
            timestamp: chrono::Utc::now().to_rfc3339(),
            summary: ReportSummary::default(),
            verdicts: Vec::new(),
        }
    }

    /// Create a report from verdicts
    pub fn from_verdicts(verdicts: Vec<ValidationVerdict>) -> Self {
        let mut report = Self::new();
        for verdict in verdicts {
            report.add_verdict(verdict);
        }
        report
    }

    /// Add a verdict to the report
    pub fn add_verdict(&mut self, verdict: ValidationVerdict) {
        match verdict.severity {
            Severity::Error => self.summary.errors += 1,
            Severity::Warning => self.summary.warnings += 1,
            Severity::Success => self.summary.passed += 1,
            Severity::Info => {}
        }

        self.summary.total += 1;
        self.verdicts.push(verdict);
    }

    /// Check if any name has critical issues
    pub fn has_errors(&self) -> bool {
        self.summary.errors > 0
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Save to file
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let json = self.to_json()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, json)
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}
