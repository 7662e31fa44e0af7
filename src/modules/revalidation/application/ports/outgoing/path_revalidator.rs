use async_trait::async_trait;

/// Marks a rendered route stale so the next request renders it again.
#[async_trait]
pub trait PathRevalidator: Send + Sync {
    async fn revalidate_path(&self, path: &str);
}
