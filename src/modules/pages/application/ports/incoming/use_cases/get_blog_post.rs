use async_trait::async_trait;

use super::PageError;
use crate::modules::content::application::domain::entities::BlogPost;

#[async_trait]
pub trait GetBlogPostUseCase: Send + Sync {
    /// `PageError::InvalidSlug` for a blank slug, `PageError::NotFound` when
    /// no post carries it.
    async fn execute(&self, slug: &str) -> Result<BlogPost, PageError>;
}
