//! Typed client for the Gemini generateContent REST endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::GeminiConfig;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to reach Gemini: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Gemini returned HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("failed to decode Gemini response: {0}")]
    Decode(String),
}

/// Outcome of a single generation call. Empty/whitespace-only provider text is
/// a distinct variant so the caller can substitute its fallback explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    Text(String),
    Empty,
}

/// Seam for the external text-generation provider. Handlers depend on this
/// trait so tests can substitute a double for the real Gemini client.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Generation, ProviderError>;
}

/// Sampling parameters sent with every request. `stop_sequences = ["."]` is a
/// deliberate answer-shortening policy: generation ends at the first period.
/// Known limitation: this can clip abbreviations and decimal numbers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    pub temperature: f64,
    pub top_p: f64,
    pub max_output_tokens: u32,
    pub stop_sequences: Vec<String>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.2,
            top_p: 0.95,
            max_output_tokens: 150,
            stop_sequences: vec![".".to_string()],
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationParams,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

pub struct GeminiClient {
    http: HttpClient,
    base_url: String,
    model: String,
    api_key: String,
    params: GenerationParams,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> anyhow::Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            params: GenerationParams::default(),
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<Generation, ProviderError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: self.params.clone(),
        };

        let response = self.http.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status { status, body });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        Ok(extract_text(&parsed))
    }
}

/// Joins the text parts of the first candidate and trims. A response with no
/// candidates or only blank text is an empty generation, not an error.
fn extract_text(response: &GenerateContentResponse) -> Generation {
    let text = response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .map(|part| part.text.as_str())
                .collect::<String>()
        })
        .unwrap_or_default();

    let trimmed = text.trim();
    if trimmed.is_empty() {
        Generation::Empty
    } else {
        Generation::Text(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn extracts_trimmed_candidate_text() {
        let response = parse(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "  Lunes a Domingo de 11am a 9pm \n" }] } }
            ]
        }));

        assert_eq!(
            extract_text(&response),
            Generation::Text("Lunes a Domingo de 11am a 9pm".to_string())
        );
    }

    #[test]
    fn joins_multiple_parts_of_first_candidate() {
        let response = parse(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "Hola" }, { "text": ", mundo" }] } },
                { "content": { "parts": [{ "text": "ignorado" }] } }
            ]
        }));

        assert_eq!(
            extract_text(&response),
            Generation::Text("Hola, mundo".to_string())
        );
    }

    #[test]
    fn no_candidates_is_empty() {
        assert_eq!(extract_text(&parse(json!({}))), Generation::Empty);
        assert_eq!(
            extract_text(&parse(json!({ "candidates": [] }))),
            Generation::Empty
        );
    }

    #[test]
    fn whitespace_only_text_is_empty() {
        let response = parse(json!({
            "candidates": [{ "content": { "parts": [{ "text": "   \n" }] } }]
        }));

        assert_eq!(extract_text(&response), Generation::Empty);
    }

    #[test]
    fn generation_params_serialize_to_gemini_wire_names() {
        let value = serde_json::to_value(GenerationParams::default()).unwrap();

        assert_eq!(value["temperature"], json!(0.2));
        assert_eq!(value["topP"], json!(0.95));
        assert_eq!(value["maxOutputTokens"], json!(150));
        assert_eq!(value["stopSequences"], json!(["."]));
    }
}
