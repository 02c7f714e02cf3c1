//! Gemini `generateContent` client with Google Search grounding.
//!
//! Only the slice of the REST surface the nickname lookup needs: one user
//! turn, the search tool switched on, and the text of the first candidate.

use serde::{Deserialize, Serialize};

use crate::config::RefreshConfig;
use crate::error::{EnrichmentError, EnrichmentResult};
use crate::refresh::NicknameSource;

const API_KEY_HEADER: &str = "x-goog-api-key";

// ═══════════════════════════════════════════════════════════════════════════════
// Wire types
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub tools: Vec<Tool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub google_search: GoogleSearch,
}

/// Empty marker object enabling search grounding.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GoogleSearch {}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Set on reasoning parts, which are not part of the answer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

impl GenerateContentRequest {
    /// Single user turn with search grounding enabled.
    pub fn grounded_query(query: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(query.into()),
                    thought: None,
                }],
            }],
            tools: vec![Tool {
                google_search: GoogleSearch {},
            }],
        }
    }
}

impl GenerateContentResponse {
    /// Concatenated answer text of the first candidate.
    ///
    /// Reasoning parts are skipped. Returns `None` when the candidate carries
    /// no text part at all.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let mut text: Option<String> = None;
        for part in parts.iter().filter(|p| p.thought != Some(true)) {
            if let Some(t) = &part.text {
                text.get_or_insert_with(String::new).push_str(t);
            }
        }
        text
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Client
// ═══════════════════════════════════════════════════════════════════════════════

/// HTTP client asking Gemini for the profile owner's current nickname.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: RefreshConfig,
}

impl GeminiClient {
    pub fn new(config: RefreshConfig) -> Self {
        Self::with_http(reqwest::Client::new(), config)
    }

    /// Use a preconfigured reqwest client (proxy, custom TLS roots).
    pub fn with_http(http: reqwest::Client, config: RefreshConfig) -> Self {
        Self { http, config }
    }

    /// Run one `generateContent` call for the configured query.
    pub async fn generate(&self) -> EnrichmentResult<GenerateContentResponse> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(EnrichmentError::MissingCredential)?;

        let url = self.config.generate_content_url();
        tracing::debug!(%url, model = %self.config.model, "Requesting nickname");

        let response = self
            .http
            .post(url)
            .header(API_KEY_HEADER, api_key)
            .json(&GenerateContentRequest::grounded_query(&self.config.query))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(EnrichmentError::Service {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| EnrichmentError::MalformedResponse(e.to_string()))
    }
}

impl NicknameSource for GeminiClient {
    async fn fetch_nickname(&self) -> EnrichmentResult<Option<String>> {
        Ok(self.generate().await?.text())
    }
}
