//! Integration tests for suggestion providers
//!
//! The Gemini provider is exercised against a one-shot local HTTP server, so
//! these tests need no credentials. The live test is marked `#[ignore]`.
//!
//! ## Running Tests
//!
//! ```bash
//! # Run all non-ignored tests (no credentials required)
//! cargo test -p lexifield-ai --test integration_tests
//!
//! # Run the live Gemini test
//! GEMINI_API_KEY=... cargo test -p lexifield-ai --test integration_tests -- --ignored
//! ```

use lexifield_ai::{
    DescriptionRequest, GeminiProvider, GenerationError, MockProvider, SuggestionProvider,
    SuggestionRequest,
};
use lexifield_core::ProviderConfig;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

// =============================================================================
// Helper Functions
// =============================================================================

/// Wrap a model answer in a generateContent response envelope
fn gemini_envelope(answer: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": answer }] },
            "finishReason": "STOP"
        }]
    })
    .to_string()
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

/// Serve exactly one HTTP response; the handle yields the raw request
async fn serve_once(status: u16, body: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);

            if let Some(end) = find_header_end(&request) {
                let headers = String::from_utf8_lossy(&request[..end]).to_lowercase();
                let content_length = headers
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if request.len() >= end + 4 + content_length {
                    break;
                }
            }
        }

        let response = format!(
            "HTTP/1.1 {} Status\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;

        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{}/models", addr), handle)
}

fn provider_for(endpoint: &str) -> GeminiProvider {
    GeminiProvider::new("test-key", "gemini-test")
        .unwrap()
        .with_endpoint(endpoint)
}

// =============================================================================
// Gemini provider against a local server
// =============================================================================

#[tokio::test]
async fn test_gemini_suggestion_roundtrip() {
    let answer = r#"{"suggestedFieldName": "customerEmail", "reasoning": "Matches customerName."}"#;
    let (endpoint, server) = serve_once(200, gemini_envelope(answer)).await;

    let request = SuggestionRequest::new("The customer's primary email")
        .with_existing_names(["orderId", "customerName"]);
    let result = provider_for(&endpoint).suggest_field_name(&request).await.unwrap();

    assert_eq!(result.suggested_field_name, "customerEmail");
    assert_eq!(result.reasoning, "Matches customerName.");

    let raw = server.await.unwrap();
    assert!(raw.starts_with("POST /models/gemini-test:generateContent HTTP/1.1"));
    assert!(raw.to_lowercase().contains("x-goog-api-key: test-key"));
    assert!(raw.contains("Existing Field Names: orderId, customerName"));
    assert!(raw.contains("\"responseMimeType\":\"application/json\""));
    assert!(!raw.contains("key=test-key"));
}

#[tokio::test]
async fn test_gemini_description_roundtrip() {
    let answer = r#"{"fieldDescription": "The email address used to contact the customer."}"#;
    let (endpoint, server) = serve_once(200, gemini_envelope(answer)).await;

    let request = DescriptionRequest::new("customerEmail", "Contact email, string")
        .with_regulatory_requirements("GDPR");
    let result = provider_for(&endpoint).generate_description(&request).await.unwrap();

    assert_eq!(result.field_description, "The email address used to contact the customer.");

    let raw = server.await.unwrap();
    assert!(raw.contains("Regulatory Requirements: GDPR"));
}

#[tokio::test]
async fn test_gemini_error_status_is_provider_error() {
    let body = r#"{"error": {"code": 429, "message": "Resource has been exhausted"}}"#;
    let (endpoint, _server) = serve_once(429, body.to_string()).await;

    let result = provider_for(&endpoint)
        .suggest_field_name(&SuggestionRequest::new("anything"))
        .await;

    match result {
        Err(GenerationError::Provider { status, message }) => {
            assert_eq!(status, 429);
            assert!(message.contains("Resource has been exhausted"));
        }
        other => panic!("expected provider error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_gemini_answer_with_missing_field_is_invalid() {
    let (endpoint, _server) = serve_once(200, gemini_envelope(r#"{"reasoning": "no name"}"#)).await;

    let result = provider_for(&endpoint)
        .suggest_field_name(&SuggestionRequest::new("anything"))
        .await;

    assert!(matches!(result, Err(GenerationError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_gemini_answer_with_empty_name_is_invalid() {
    let answer = r#"{"suggestedFieldName": "", "reasoning": "n/a"}"#;
    let (endpoint, _server) = serve_once(200, gemini_envelope(answer)).await;

    let result = provider_for(&endpoint)
        .suggest_field_name(&SuggestionRequest::new("anything"))
        .await;

    assert!(matches!(result, Err(GenerationError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_gemini_unreachable_endpoint_is_network_error() {
    // Bind then drop to get a port with nothing listening
    let addr = TcpListener::bind("127.0.0.1:0").await.unwrap().local_addr().unwrap();

    let result = provider_for(&format!("http://{}/models", addr))
        .suggest_field_name(&SuggestionRequest::new("anything"))
        .await;

    assert!(matches!(result, Err(GenerationError::Network(_))));
}

// =============================================================================
// Trait objects
// =============================================================================

#[tokio::test]
async fn test_boxed_provider_dispatch() {
    let provider: Box<dyn SuggestionProvider> =
        Box::new(MockProvider::new().with_suggestion("orderTotal", "Short and clear."));

    assert_eq!(provider.name(), "Mock");
    let result = provider
        .suggest_field_name(&SuggestionRequest::new("Total order value"))
        .await
        .unwrap();
    assert_eq!(result.suggested_field_name, "orderTotal");
}

// =============================================================================
// Live Gemini (requires credentials)
// =============================================================================

#[tokio::test]
#[ignore]
async fn test_gemini_live_suggestion() {
    if std::env::var("GEMINI_API_KEY").is_err() {
        eprintln!("Skipping: GEMINI_API_KEY not set");
        return;
    }

    let provider = GeminiProvider::from_config(&ProviderConfig::default()).unwrap();
    let request = SuggestionRequest::new("The date on which an invoice period starts")
        .with_existing_names(["invoiceDate", "originalInvoiceDate"]);

    let result = provider.suggest_field_name(&request).await.unwrap();
    assert!(!result.suggested_field_name.is_empty());
    assert!(!result.reasoning.is_empty());
}
