use async_trait::async_trait;

use super::PageError;
use crate::modules::content::application::domain::entities::Project;

#[async_trait]
pub trait GetProjectsPageUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Project>, PageError>;
}
