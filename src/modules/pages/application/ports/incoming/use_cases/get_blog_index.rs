use async_trait::async_trait;

use super::PageError;
use crate::modules::content::application::domain::entities::BlogPost;

#[async_trait]
pub trait GetBlogIndexUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<BlogPost>, PageError>;
}
