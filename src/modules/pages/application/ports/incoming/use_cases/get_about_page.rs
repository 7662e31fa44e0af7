use async_trait::async_trait;

use super::PageError;
use crate::modules::content::application::domain::entities::Profile;

#[async_trait]
pub trait GetAboutPageUseCase: Send + Sync {
    async fn execute(&self) -> Result<Profile, PageError>;
}
