use async_trait::async_trait;

use crate::modules::{
    content::application::{domain::entities::BlogPost, ports::outgoing::ContentQuery},
    pages::application::ports::incoming::use_cases::{GetBlogIndexUseCase, PageError},
};

#[derive(Debug, Clone)]
pub struct GetBlogIndexService<Q>
where
    Q: ContentQuery,
{
    query: Q,
}

impl<Q> GetBlogIndexService<Q>
where
    Q: ContentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetBlogIndexUseCase for GetBlogIndexService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<BlogPost>, PageError> {
        Ok(self.query.blog_posts().await?)
    }
}
