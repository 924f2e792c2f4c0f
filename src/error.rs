//! Error types for the lookup gateway

use thiserror::Error;

use crate::types::MediaKind;

/// Result type alias for lookup operations
pub type LookupResult<T> = std::result::Result<T, LookupError>;

/// Failure modes of an image lookup, one variant per cause
#[derive(Error, Debug, Clone)]
pub enum LookupError {
    /// Inbound request was malformed or missing required fields
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Request asked for a media kind the gateway does not serve
    #[error("Media kind '{0}' is not supported")]
    UnsupportedKind(MediaKind),

    /// Network-level failure reaching the provider (DNS, connect, TLS, timeout)
    #[error("Provider unreachable: {0}")]
    Transport(String),

    /// Provider answered with a non-success status
    #[error("Provider error ({status}): {body}")]
    Provider { status: u16, body: String },

    /// Provider answered successfully but returned no matching images
    #[error("No images found")]
    NotFound,

    /// Provider payload did not match the expected schema
    #[error("Decode error: {0}")]
    Decode(String),

    /// Startup or client configuration problem
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LookupError {
    /// HTTP status each error surfaces as.
    ///
    /// This is the single mapping used by the server layer. Keep the match
    /// exhaustive so every variant carries a deliberate status.
    pub fn http_status(&self) -> u16 {
        match self {
            LookupError::Validation(_) => 400,
            LookupError::UnsupportedKind(_) => 400,
            LookupError::Transport(_) => 500,
            LookupError::Provider { .. } => 500,
            LookupError::NotFound => 404,
            LookupError::Decode(_) => 500,
            LookupError::Config(_) => 500,
        }
    }

    /// Stable machine-readable code included in failure bodies
    pub fn code(&self) -> &'static str {
        match self {
            LookupError::Validation(_) => "validation_error",
            LookupError::UnsupportedKind(_) => "unsupported_kind",
            LookupError::Transport(_) => "transport_error",
            LookupError::Provider { .. } => "provider_error",
            LookupError::NotFound => "not_found",
            LookupError::Decode(_) => "decode_error",
            LookupError::Config(_) => "config_error",
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            LookupError::Transport(format!("request timed out: {error}"))
        } else if error.is_decode() {
            LookupError::Decode(error.to_string())
        } else {
            LookupError::Transport(error.to_string())
        }
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(error: serde_json::Error) -> Self {
        LookupError::Decode(format!("JSON parsing failed: {error}"))
    }
}
