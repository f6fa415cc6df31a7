//! Configuration schema (lexifield.toml)

use serde::{Deserialize, Serialize};

/// Naming conventions enforced by the local rule set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConventions {
    /// Maximum field name length, in characters
    #[serde(default = "default_max_length")]
    pub max_length: usize,

    /// Names that may not be used, compared case-insensitively
    #[serde(default = "default_reserved_words")]
    pub reserved_words: Vec<String>,
}

fn default_max_length() -> usize {
    30
}

fn default_reserved_words() -> Vec<String> {
    ["id", "type", "object"].iter().map(|w| w.to_string()).collect()
}

impl Default for NamingConventions {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
            reserved_words: default_reserved_words(),
        }
    }
}

impl NamingConventions {
    /// Check if a name is reserved (case-insensitive)
    pub fn is_reserved(&self, name: &str) -> bool {
        let lowered = name.to_lowercase();
        self.reserved_words.iter().any(|w| w.to_lowercase() == lowered)
    }
}

/// Inputs the validator sends to the suggestion collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSettings {
    /// Existing field names used for cross-referencing
    #[serde(default = "default_existing_field_names")]
    pub existing_field_names: Vec<String>,

    /// Framework requirements forwarded with every suggestion request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework_requirements: Option<String>,
}

fn default_existing_field_names() -> Vec<String> {
    ["orderId", "customerName", "productSku"]
        .iter()
        .map(|n| n.to_string())
        .collect()
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            existing_field_names: default_existing_field_names(),
            framework_requirements: None,
        }
    }
}

/// Which suggestion provider to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Google Gemini generateContent API
    Gemini,

    /// Canned offline responses
    Mock,
}

impl Default for ProviderKind {
    fn default() -> Self {
        Self::Gemini
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gemini" => Ok(Self::Gemini),
            "mock" => Ok(Self::Mock),
            other => Err(format!("unsupported provider '{}'. Supported: gemini, mock", other)),
        }
    }
}

/// Model provider connection configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider type (gemini, mock)
    #[serde(rename = "type", default)]
    pub kind: ProviderKind,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the models endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Per-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_temperature() -> f32 {
    0.2
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: ProviderKind::default(),
            model: default_model(),
            endpoint: default_endpoint(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
            temperature: default_temperature(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Naming conventions
    #[serde(default)]
    pub naming: NamingConventions,

    /// Validation collaborator inputs
    #[serde(default)]
    pub validation: ValidationSettings,

    /// Model provider
    #[serde(default)]
    pub provider: ProviderConfig,
}

impl Config {
    /// Load config from TOML file
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        Self::from_toml(&contents)
    }

    /// Load config from TOML string
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml)
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Save config to TOML file
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        let toml = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path, toml)
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }
}

/// Config error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.naming.max_length, 30);
        assert_eq!(config.naming.reserved_words, vec!["id", "type", "object"]);
        assert_eq!(
            config.validation.existing_field_names,
            vec!["orderId", "customerName", "productSku"]
        );
        assert_eq!(config.provider.kind, ProviderKind::Gemini);
        assert_eq!(config.provider.api_key_env, "GEMINI_API_KEY");
    }

    #[test]
    fn reserved_words_are_case_insensitive() {
        let naming = NamingConventions::default();
        assert!(naming.is_reserved("ID"));
        assert!(naming.is_reserved("Type"));
        assert!(!naming.is_reserved("identifier"));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            [naming]
            max_length = 40

            [provider]
            type = "mock"
            "#,
        )
        .unwrap();

        assert_eq!(config.naming.max_length, 40);
        assert_eq!(config.naming.reserved_words.len(), 3);
        assert_eq!(config.provider.kind, ProviderKind::Mock);
        assert_eq!(config.provider.model, "gemini-2.0-flash");
        assert_eq!(config.provider.timeout_secs, 30);
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let result = Config::from_toml("[naming\nmax_length = ");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn config_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexifield.toml");

        let mut config = Config::default();
        config.validation.framework_requirements = Some("JSON:API".to_string());
        config.save_to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn provider_kind_parsing() {
        assert_eq!("Gemini".parse::<ProviderKind>(), Ok(ProviderKind::Gemini));
        assert_eq!("mock".parse::<ProviderKind>(), Ok(ProviderKind::Mock));
        assert!("openai".parse::<ProviderKind>().is_err());
    }
}
