//! Masking technique recommendations
//!
//! A fixed rule table keyed on sensitivity, data type and a few field name
//! keywords. Always defer to data governance policy for the final decision.

use lexifield_core::{DataType, Sensitivity};
use serde::{Deserialize, Serialize};

/// Data masking technique
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaskingTechnique {
    #[serde(rename = "Encryption (AES-256)")]
    Encryption,

    Tokenization,

    Redaction,

    #[serde(rename = "Hashing (SHA-256)")]
    Hashing,

    #[serde(rename = "Date Truncation")]
    DateTruncation,

    Generalization,

    None,
}

impl MaskingTechnique {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Encryption => "Encryption (AES-256)",
            Self::Tokenization => "Tokenization",
            Self::Redaction => "Redaction",
            Self::Hashing => "Hashing (SHA-256)",
            Self::DateTruncation => "Date Truncation",
            Self::Generalization => "Generalization",
            Self::None => "None",
        }
    }
}

impl std::fmt::Display for MaskingTechnique {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recommend a masking technique for a field
///
/// Without both a data type and a sensitivity level there is nothing to go on,
/// and the recommendation is [`MaskingTechnique::None`].
pub fn recommend_masking(
    field_name: &str,
    data_type: Option<DataType>,
    sensitivity: Option<Sensitivity>,
) -> MaskingTechnique {
    let (Some(data_type), Some(sensitivity)) = (data_type, sensitivity) else {
        return MaskingTechnique::None;
    };

    let name = field_name.to_lowercase();
    let name_has = |keywords: &[&str]| keywords.iter().any(|k| name.contains(k));

    match sensitivity {
        Sensitivity::Critical => match data_type {
            DataType::String | DataType::Object => MaskingTechnique::Tokenization,
            _ => MaskingTechnique::Encryption,
        },
        Sensitivity::High => match data_type {
            DataType::String if name_has(&["email", "phone"]) => MaskingTechnique::Redaction,
            DataType::Date | DataType::Timestamp => MaskingTechnique::DateTruncation,
            _ => MaskingTechnique::Encryption,
        },
        Sensitivity::Medium => match data_type {
            DataType::String if name_has(&["address"]) => MaskingTechnique::Generalization,
            DataType::Number if name_has(&["salary", "income"]) => MaskingTechnique::Hashing,
            DataType::Date => MaskingTechnique::DateTruncation,
            _ => MaskingTechnique::Hashing,
        },
        Sensitivity::Low | Sensitivity::None => MaskingTechnique::None,
    }
}
