//! Refresh task configuration.
//!
//! The credential is read once at startup and handed to the task as a value,
//! so the task itself never touches process-wide state.

use serde::{Deserialize, Serialize};

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Optional override of the service base URL.
pub const ENDPOINT_ENV: &str = "LINKBIO_GEMINI_ENDPOINT";

/// Optional override of the model name.
pub const MODEL_ENV: &str = "LINKBIO_GEMINI_MODEL";

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Question sent to the search-grounded model.
pub const NICKNAME_QUERY: &str =
    "What is the current nickname of TikTok user @inidoffy? Return only the nickname string.";

/// Everything the refresh task needs to talk to the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// API key; `None` makes every fetch fail with `MissingCredential`
    pub api_key: Option<String>,

    /// Base URL, without trailing path
    pub endpoint: String,

    pub model: String,

    pub query: String,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            query: NICKNAME_QUERY.to_string(),
        }
    }
}

impl RefreshConfig {
    /// Build a config from the process environment.
    ///
    /// Blank values are treated as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            api_key: get(API_KEY_ENV),
            endpoint: get(ENDPOINT_ENV).unwrap_or(defaults.endpoint),
            model: get(MODEL_ENV).unwrap_or(defaults.model),
            query: defaults.query,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Full `generateContent` URL for the configured model.
    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = RefreshConfig::from_lookup(lookup(&[]));
        assert_eq!(config, RefreshConfig::default());
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_reads_key_and_overrides() {
        let config = RefreshConfig::from_lookup(lookup(&[
            (API_KEY_ENV, "secret"),
            (ENDPOINT_ENV, "http://127.0.0.1:9000/"),
            (MODEL_ENV, "gemini-2.5-flash"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(
            config.generate_content_url(),
            "http://127.0.0.1:9000/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_blank_key_is_unset() {
        let config = RefreshConfig::from_lookup(lookup(&[(API_KEY_ENV, "   ")]));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_default_url() {
        assert_eq!(
            RefreshConfig::default().generate_content_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }
}
