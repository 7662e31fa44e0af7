use async_trait::async_trait;

use crate::modules::{
    content::application::{domain::entities::Profile, ports::outgoing::ContentQuery},
    pages::application::ports::incoming::use_cases::{GetAboutPageUseCase, PageError},
};

#[derive(Debug, Clone)]
pub struct GetAboutPageService<Q>
where
    Q: ContentQuery,
{
    query: Q,
}

impl<Q> GetAboutPageService<Q>
where
    Q: ContentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetAboutPageUseCase for GetAboutPageService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Profile, PageError> {
        self.query.profile().await?.ok_or(PageError::NotFound)
    }
}
