use async_trait::async_trait;

use crate::modules::content::application::domain::entities::{BlogPost, Profile, Project};
use crate::modules::content::application::ports::outgoing::content_client::ContentClientError;

/// Which slice of the project list a page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectListing {
    /// Newest first, at most `n` entries.
    Latest(usize),
    /// CMS order, no limit.
    All,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ContentQueryError {
    #[error(transparent)]
    Client(#[from] ContentClientError),

    #[error("Unexpected content shape: {0}")]
    Decode(String),
}

#[async_trait]
pub trait ContentQuery: Send + Sync {
    async fn profile(&self) -> Result<Option<Profile>, ContentQueryError>;

    async fn hero_roles(&self) -> Result<Vec<String>, ContentQueryError>;

    async fn projects(&self, listing: ProjectListing) -> Result<Vec<Project>, ContentQueryError>;

    async fn blog_posts(&self) -> Result<Vec<BlogPost>, ContentQueryError>;

    async fn blog_post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, ContentQueryError>;

    async fn blog_slugs(&self) -> Result<Vec<String>, ContentQueryError>;
}
