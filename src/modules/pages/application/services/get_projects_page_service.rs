use async_trait::async_trait;

use crate::modules::{
    content::application::{
        domain::entities::Project,
        ports::outgoing::{ContentQuery, ProjectListing},
    },
    pages::application::ports::incoming::use_cases::{GetProjectsPageUseCase, PageError},
};

#[derive(Debug, Clone)]
pub struct GetProjectsPageService<Q>
where
    Q: ContentQuery,
{
    query: Q,
}

impl<Q> GetProjectsPageService<Q>
where
    Q: ContentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectsPageUseCase for GetProjectsPageService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Project>, PageError> {
        Ok(self.query.projects(ProjectListing::All).await?)
    }
}
