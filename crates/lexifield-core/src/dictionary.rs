//! Data dictionary entries and search

use serde::{Deserialize, Serialize};

/// Data type of an API field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    String,
    Number,
    Boolean,
    Object,
    Array,
    Date,
    Timestamp,
    Mixed,
}

impl DataType {
    pub const ALL: [DataType; 8] = [
        Self::String,
        Self::Number,
        Self::Boolean,
        Self::Object,
        Self::Array,
        Self::Date,
        Self::Timestamp,
        Self::Mixed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
            Self::Date => "date",
            Self::Timestamp => "timestamp",
            Self::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DataType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown data type '{}'", s))
    }
}

/// How confidential a field's data is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sensitivity {
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl Sensitivity {
    pub const ALL: [Sensitivity; 5] = [
        Self::None,
        Self::Low,
        Self::Medium,
        Self::High,
        Self::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for Sensitivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Sensitivity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown sensitivity level '{}'", s))
    }
}

/// Metadata for one API field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataDictionaryEntry {
    pub id: String,

    /// Field name as exposed by the API
    pub field_name: String,

    pub description: String,

    pub data_type: DataType,

    pub sensitivity: Sensitivity,

    /// Free-text masking guidance
    pub masking_recommendation: String,

    /// API the field belongs to (e.g. "User API")
    pub api_group: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Example value, rendered in code font
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternative_names: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validation_rules: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance_notes: Option<String>,

    /// Date of last change (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl DataDictionaryEntry {
    /// Create an entry with the required fields only
    pub fn new(
        id: impl Into<String>,
        field_name: impl Into<String>,
        description: impl Into<String>,
        data_type: DataType,
        sensitivity: Sensitivity,
        api_group: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            field_name: field_name.into(),
            description: description.into(),
            data_type,
            sensitivity,
            masking_recommendation: "None".to_string(),
            api_group: api_group.into(),
            tags: Vec::new(),
            example: None,
            alternative_names: Vec::new(),
            validation_rules: Vec::new(),
            compliance_notes: None,
            last_updated: None,
        }
    }

    pub fn with_masking(mut self, masking: impl Into<String>) -> Self {
        self.masking_recommendation = masking.into();
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    pub fn with_alternative_names(mut self, names: &[&str]) -> Self {
        self.alternative_names = names.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn with_validation_rules(mut self, rules: &[&str]) -> Self {
        self.validation_rules = rules.iter().map(|r| r.to_string()).collect();
        self
    }

    pub fn with_compliance_notes(mut self, notes: impl Into<String>) -> Self {
        self.compliance_notes = Some(notes.into());
        self
    }

    pub fn with_last_updated(mut self, date: impl Into<String>) -> Self {
        self.last_updated = Some(date.into());
        self
    }

    /// Case-insensitive match against name, description, API group and tags.
    /// `needle` must already be lowercased.
    fn matches(&self, needle: &str) -> bool {
        self.field_name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.api_group.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }
}

/// In-memory data dictionary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataDictionary {
    pub entries: Vec<DataDictionaryEntry>,
}

impl DataDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<DataDictionaryEntry>) -> Self {
        Self { entries }
    }

    /// Dictionary pre-populated with the sample fields shown on first launch
    pub fn seeded() -> Self {
        Self::from_entries(vec![
            DataDictionaryEntry::new(
                "1",
                "userId",
                "Unique identifier for the user.",
                DataType::String,
                Sensitivity::Medium,
                "User API",
            )
            .with_masking("Tokenization")
            .with_tags(&["PII", "Identifier"])
            .with_example("u-123xyz")
            .with_alternative_names(&["user_id", "identifier_user"])
            .with_validation_rules(&["UUID format"])
            .with_compliance_notes("GDPR Article 6")
            .with_last_updated("2023-10-26"),
            DataDictionaryEntry::new(
                "2",
                "transactionAmount",
                "The monetary value of the transaction.",
                DataType::Number,
                Sensitivity::High,
                "Billing API",
            )
            .with_masking("Encryption (AES-256)")
            .with_tags(&["Financial"])
            .with_example("100.50")
            .with_validation_rules(&["Positive decimal, 2 decimal places"])
            .with_last_updated("2023-11-15"),
            DataDictionaryEntry::new(
                "3",
                "isActive",
                "Indicates if the user account is active.",
                DataType::Boolean,
                Sensitivity::Low,
                "User API",
            )
            .with_tags(&["Status"])
            .with_example("true")
            .with_last_updated("2023-09-01"),
            DataDictionaryEntry::new(
                "4",
                "orderDate",
                "The date when the order was placed.",
                DataType::Date,
                Sensitivity::Low,
                "Order API",
            )
            .with_masking("Date Truncation (Month/Year)")
            .with_tags(&["Timestamp", "Order"])
            .with_example("2024-01-15")
            .with_compliance_notes("Retain for 7 years")
            .with_last_updated("2024-01-20"),
            DataDictionaryEntry::new(
                "5",
                "productDetails",
                "A complex object containing product information.",
                DataType::Object,
                Sensitivity::Medium,
                "Product API",
            )
            .with_masking("Field-level masking for sensitive sub-fields")
            .with_tags(&["Details"])
            .with_example("{\n  \"name\": \"Awesome Widget\",\n  \"price\": 29.99,\n  \"sku\": \"AW-001\"\n}")
            .with_last_updated("2024-02-10"),
        ])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&DataDictionaryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn find_by_name(&self, field_name: &str) -> Option<&DataDictionaryEntry> {
        self.entries.iter().find(|e| e.field_name == field_name)
    }

    /// All field names, in dictionary order
    pub fn field_names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.field_name.as_str()).collect()
    }

    /// Filter entries by a search term; an empty (or blank) term returns everything
    pub fn search(&self, term: &str) -> Vec<&DataDictionaryEntry> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.entries.iter().collect();
        }

        self.entries.iter().filter(|e| e.matches(&needle)).collect()
    }

    /// Serialize a (possibly filtered) view as pretty JSON
    pub fn to_json(entries: &[&DataDictionaryEntry]) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(entries)
    }
}
