use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum RevalidateContentError {
    #[error("Failed to list blog slugs: {0}")]
    SlugQueryFailed(String),
}

#[async_trait]
pub trait RevalidateContentUseCase: Send + Sync {
    /// Returns every path marked stale, in the order they were marked.
    async fn execute(&self) -> Result<Vec<String>, RevalidateContentError>;
}
