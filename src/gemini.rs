//! Gemini `generateContent` client.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::GEMINI_BASE_URL;
use crate::error::{QuotePostError, check_status, read_json};
use crate::quote::TextGenerator;

/// Request body for POST /v1beta/models/{model}:generateContent
#[derive(Serialize, Debug)]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize, Debug)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize, Debug)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize, Debug)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Debug)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, all its parts joined.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Client for the Gemini REST API.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Creates a client for `model`.
    pub fn new(client: reqwest::Client, api_key: &str, model: &str) -> Self {
        Self {
            client,
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{GEMINI_BASE_URL}/{}:generateContent", self.model)
    }
}

impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, QuotePostError> {
        let body = GenerateContentRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;
        let response = check_status("Gemini", response).await?;
        let parsed: GenerateContentResponse = read_json(response).await?;
        debug!("Gemini response: {:?}", parsed);
        parsed
            .into_text()
            .ok_or_else(|| QuotePostError::InvalidResponse("Gemini returned no text".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_shape() {
        let body = GenerateContentRequest {
            contents: [Content {
                parts: [Part { text: "hello" }],
            }],
        };
        assert_eq!(
            serde_json::to_value(&body).expect("serialize"),
            serde_json::json!({"contents": [{"parts": [{"text": "hello"}]}]})
        );
    }

    #[test]
    fn first_candidate_text() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"「a」"},{"text":"- b"}],"role":"model"},"finishReason":"STOP"}]}"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).expect("parse");
        assert_eq!(parsed.into_text().as_deref(), Some("「a」- b"));
    }

    #[test]
    fn blocked_response_has_no_text() {
        let raw = r#"{"candidates":[{"finishReason":"SAFETY"}],"promptFeedback":{}}"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).expect("parse");
        assert_eq!(parsed.into_text(), None);
        let empty: GenerateContentResponse = serde_json::from_str("{}").expect("parse");
        assert_eq!(empty.into_text(), None);
    }

    #[test]
    fn endpoint_includes_model() {
        let client = GeminiClient::new(reqwest::Client::new(), "key", "gemini-test");
        assert!(client.endpoint().ends_with("/models/gemini-test:generateContent"));
        assert!(!format!("{client:?}").contains("key"));
    }
}
