use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;

/// Named GROQ parameters (`$slug` is passed as `"slug"`).
pub type QueryParams = BTreeMap<String, Value>;

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ContentClientError {
    #[error("Invalid query url: {0}")]
    InvalidUrl(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Content API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode content response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait ContentClient: Send + Sync {
    /// Runs a read-only query and returns the `result` member of the response.
    async fn fetch(&self, query: &str, params: &QueryParams) -> Result<Value, ContentClientError>;
}
