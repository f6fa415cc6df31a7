//! Gemini provider using the generateContent REST API
//!
//! Each provider call renders a prompt, sends exactly one request and decodes
//! the JSON object the model was asked to answer with. There is no retry.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let provider = GeminiProvider::new(std::env::var("GEMINI_API_KEY")?, "gemini-2.0-flash")?;
//! let result = provider
//!     .suggest_field_name(&SuggestionRequest::new("The customer's primary email"))
//!     .await?;
//! ```
//!
//! Reference: https://ai.google.dev/api/generate-content

use crate::prompt::PromptRenderer;
use crate::provider::{
    DescriptionRequest, GeneratedDescription, GenerationError, SuggestionProvider,
    SuggestionRequest, SuggestionResult,
};
use lexifield_core::ProviderConfig;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MAX_OUTPUT_TOKENS: i32 = 1024;

/// Request body for generateContent
#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GeminiGenerationConfig,
}

/// Content block for a Gemini API request
#[derive(Debug, Serialize)]
pub struct GeminiContent {
    pub role: String,
    pub parts: Vec<GeminiPart>,
}

/// Text part within a Gemini content block
#[derive(Debug, Serialize)]
pub struct GeminiPart {
    pub text: String,
}

/// Generation configuration for Gemini API requests
#[derive(Debug, Serialize)]
pub struct GeminiGenerationConfig {
    pub temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: i32,
    #[serde(rename = "responseMimeType")]
    pub response_mime_type: String,
}

/// Response body from generateContent
#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

/// Candidate response from Gemini
#[derive(Debug, Deserialize)]
pub struct GeminiCandidate {
    #[serde(default)]
    pub content: Option<GeminiResponseContent>,
}

/// Content within a Gemini response candidate
#[derive(Debug, Deserialize)]
pub struct GeminiResponseContent {
    #[serde(default)]
    pub parts: Vec<GeminiResponsePart>,
}

/// Text part within a Gemini response
#[derive(Debug, Deserialize)]
pub struct GeminiResponsePart {
    #[serde(default)]
    pub text: String,
}

/// Gemini-backed suggestion provider
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    model: String,
    temperature: f32,
    prompts: PromptRenderer,
}

impl GeminiProvider {
    /// Create a provider with the default endpoint and timeout
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, GenerationError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GenerationError::Config("Gemini API key is empty".to_string()));
        }

        Ok(Self {
            client: build_client(DEFAULT_TIMEOUT_SECS)?,
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: model.into(),
            temperature: 0.2,
            prompts: PromptRenderer::new(),
        })
    }

    /// Create a provider from `[provider]` configuration
    ///
    /// The API key is read from the environment variable named by
    /// `api_key_env`.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, GenerationError> {
        let api_key = std::env::var(&config.api_key_env).map_err(|_| {
            GenerationError::Config(format!(
                "Environment variable {} is not set. Export it or add it to a .env file",
                config.api_key_env
            ))
        })?;

        let mut provider = Self::new(api_key, config.model.clone())?
            .with_endpoint(config.endpoint.clone())
            .with_temperature(config.temperature);
        provider.client = build_client(config.timeout_secs)?;

        Ok(provider)
    }

    /// Override the models endpoint (useful for proxies)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }

    fn request_body(&self, prompt: String) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart { text: prompt }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: self.temperature,
                max_output_tokens: MAX_OUTPUT_TOKENS,
                response_mime_type: "application/json".to_string(),
            },
        }
    }

    /// Send one generateContent request and decode the JSON answer
    async fn generate<T: DeserializeOwned>(&self, prompt: String) -> Result<T, GenerationError> {
        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "sending generateContent request");

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Network("request to Gemini timed out".to_string())
                } else {
                    GenerationError::Network(e.without_url().to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(status = status.as_u16(), "Gemini API error");
            return Err(GenerationError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let body: GeminiResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(format!("undecodable Gemini response: {}", e)))?;

        decode_answer(&extract_text(body)?)
    }
}

fn build_client(timeout_secs: u64) -> Result<reqwest::Client, GenerationError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| GenerationError::Config(format!("failed to build HTTP client: {}", e)))
}

/// Text of the first part of the first candidate
pub(crate) fn extract_text(response: GeminiResponse) -> Result<String, GenerationError> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| GenerationError::InvalidResponse("No candidates in Gemini response".to_string()))?
        .content
        .and_then(|content| content.parts.into_iter().next())
        .ok_or_else(|| GenerationError::InvalidResponse("No parts in Gemini response".to_string()))?
        .text;

    Ok(text)
}

/// Decode the model's JSON answer, tolerating a Markdown code fence around it
pub(crate) fn decode_answer<T: DeserializeOwned>(text: &str) -> Result<T, GenerationError> {
    let trimmed = text.trim();
    let unfenced = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.trim_end().strip_suffix("```"))
        .unwrap_or(trimmed);

    serde_json::from_str(unfenced.trim())
        .map_err(|e| GenerationError::InvalidResponse(format!("model answer is not the expected JSON: {}", e)))
}

#[async_trait::async_trait]
impl SuggestionProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "Gemini"
    }

    async fn suggest_field_name(
        &self,
        request: &SuggestionRequest,
    ) -> Result<SuggestionResult, GenerationError> {
        let prompt = self.prompts.suggest_field_name(request)?;
        let result: SuggestionResult = self.generate(prompt).await?;
        result.checked()
    }

    async fn generate_description(
        &self,
        request: &DescriptionRequest,
    ) -> Result<GeneratedDescription, GenerationError> {
        let prompt = self.prompts.generate_description(request)?;
        let result: GeneratedDescription = self.generate(prompt).await?;
        result.checked()
    }
}
