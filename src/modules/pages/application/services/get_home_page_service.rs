use async_trait::async_trait;

use crate::modules::{
    content::application::ports::outgoing::{ContentQuery, ProjectListing},
    pages::application::ports::incoming::use_cases::{GetHomePageUseCase, HomePage, PageError},
};

/// Projects featured under the hero.
pub const HOME_PROJECT_LIMIT: usize = 4;

#[derive(Debug, Clone)]
pub struct GetHomePageService<Q>
where
    Q: ContentQuery,
{
    query: Q,
}

impl<Q> GetHomePageService<Q>
where
    Q: ContentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetHomePageUseCase for GetHomePageService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    async fn execute(&self) -> Result<HomePage, PageError> {
        let (roles, projects) = tokio::try_join!(
            self.query.hero_roles(),
            self.query
                .projects(ProjectListing::Latest(HOME_PROJECT_LIMIT)),
        )?;

        Ok(HomePage { roles, projects })
    }
}
