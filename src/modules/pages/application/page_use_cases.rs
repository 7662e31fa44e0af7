use std::sync::Arc;

use crate::modules::pages::application::ports::incoming::use_cases::{
    GetAboutPageUseCase, GetBlogIndexUseCase, GetBlogPostUseCase, GetHomePageUseCase,
    GetProjectsPageUseCase,
};

#[derive(Clone)]
pub struct PageUseCases {
    pub home: Arc<dyn GetHomePageUseCase + Send + Sync>,
    pub about: Arc<dyn GetAboutPageUseCase + Send + Sync>,
    pub projects: Arc<dyn GetProjectsPageUseCase + Send + Sync>,
    pub blog_index: Arc<dyn GetBlogIndexUseCase + Send + Sync>,
    pub blog_post: Arc<dyn GetBlogPostUseCase + Send + Sync>,
}
