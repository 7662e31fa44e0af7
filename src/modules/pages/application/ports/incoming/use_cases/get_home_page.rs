use async_trait::async_trait;

use super::PageError;
use crate::modules::content::application::domain::entities::Project;

#[derive(Debug, Clone, PartialEq)]
pub struct HomePage {
    /// Headline roles, shown in rotation.
    pub roles: Vec<String>,
    /// Newest projects first.
    pub projects: Vec<Project>,
}

#[async_trait]
pub trait GetHomePageUseCase: Send + Sync {
    async fn execute(&self) -> Result<HomePage, PageError>;
}
