//! Error types for the nickname refresh

use thiserror::Error;

/// Anything that stops the refresh task from producing a nickname.
///
/// These never reach the UI. [`crate::refresh_profile`] logs them and leaves
/// the profile untouched.
#[derive(Error, Debug)]
pub enum EnrichmentError {
    /// No API key was configured
    #[error("Missing credential: GEMINI_API_KEY is not set")]
    MissingCredential,

    /// Transport-level failure (DNS, connect, TLS, reset)
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-success status
    #[error("Service error: HTTP {status}: {body}")]
    Service { status: u16, body: String },

    /// The body could not be decoded as a generateContent response
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for EnrichmentError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            EnrichmentError::MalformedResponse(err.to_string())
        } else {
            EnrichmentError::Network(err.to_string())
        }
    }
}

/// Result type alias using EnrichmentError
pub type EnrichmentResult<T> = Result<T, EnrichmentError>;
