use std::fmt;

use async_trait::async_trait;

use crate::core::draft::PostDraft;

/// Errors that can occur while talking to the post service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Client misconfigured (bad base URL, TLS backend failure).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Service answered with a non-success status.
    Api { status: u16, message: String },
    /// Body was not the JSON we expected, or the image was not valid base64.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Config(msg) => write!(f, "config error: {msg}"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// The two calls the Create Post form makes.
#[async_trait]
pub trait PostApi: Send + Sync {
    /// Returns the generated JPEG as bare base64.
    async fn generate_image(&self, prompt: &str) -> Result<String, ApiError>;

    /// Publishes the draft. The reply body is parsed but otherwise ignored.
    async fn create_post(&self, draft: &PostDraft) -> Result<(), ApiError>;
}
