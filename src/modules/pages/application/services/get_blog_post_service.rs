use async_trait::async_trait;

use crate::modules::{
    content::application::{domain::entities::BlogPost, ports::outgoing::ContentQuery},
    pages::application::ports::incoming::use_cases::{GetBlogPostUseCase, PageError},
};

#[derive(Debug, Clone)]
pub struct GetBlogPostService<Q>
where
    Q: ContentQuery,
{
    query: Q,
}

impl<Q> GetBlogPostService<Q>
where
    Q: ContentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetBlogPostUseCase for GetBlogPostService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<BlogPost, PageError> {
        if slug.trim().is_empty() {
            return Err(PageError::InvalidSlug);
        }

        self.query
            .blog_post_by_slug(slug)
            .await?
            .ok_or(PageError::NotFound)
    }
}
