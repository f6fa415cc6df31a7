//! LexiField Core
//!
//! Core domain model for the API data dictionary console.
//! Never rename violation codes - they are part of the public API.

pub mod violation;
pub mod verdict;
pub mod dictionary;
pub mod report;
pub mod config;
pub mod state;

pub use violation::{RuleViolation, ViolationKind};
pub use verdict::{Severity, ValidationVerdict};
pub use dictionary::{DataDictionary, DataDictionaryEntry, DataType, Sensitivity};
pub use report::{ReportSummary, ReportVersion, ValidationReport};
pub use config::{Config, ConfigError, NamingConventions, ProviderConfig, ProviderKind, ValidationSettings};
pub use state::RequestState;
