//! Model provider adapters for field name suggestions and descriptions
//!
//! This crate is the boundary to the external text-generation service. The
//! rest of the workspace only sees the [`SuggestionProvider`] trait.
//!
//! ## Providers
//!
//! - [`GeminiProvider`] - Google Gemini generateContent API
//! - [`MockProvider`] - canned responses for tests and offline use
//!
//! ## Example
//!
//! ```rust,ignore
//! use lexifield_ai::{GeminiProvider, SuggestionProvider, SuggestionRequest};
//!
//! let provider = GeminiProvider::from_config(&config.provider)?;
//! let request = SuggestionRequest::new("The date the invoice period starts")
//!     .with_existing_names(["invoiceDate", "originalInvoiceDate"]);
//! let suggestion = provider.suggest_field_name(&request).await?;
//! ```

pub mod provider;
pub mod prompt;
pub mod gemini;
pub mod mock;

pub use provider::{
    DescriptionRequest, GeneratedDescription, GenerationError, SuggestionProvider,
    SuggestionRequest, SuggestionResult,
};
pub use prompt::PromptRenderer;
pub use gemini::GeminiProvider;
pub use mock::MockProvider;
