use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::modules::{
    content::application::ports::outgoing::ContentQuery,
    revalidation::application::ports::{
        incoming::use_cases::{RevalidateContentError, RevalidateContentUseCase},
        outgoing::PathRevalidator,
    },
};

/// Routes rendered from CMS content that do not depend on a slug.
pub const STATIC_PATHS: [&str; 4] = ["/", "/about", "/blog", "/projects"];

pub struct RevalidateContentService<Q>
where
    Q: ContentQuery,
{
    query: Q,
    revalidator: Arc<dyn PathRevalidator + Send + Sync>,
}

impl<Q> RevalidateContentService<Q>
where
    Q: ContentQuery,
{
    pub fn new(query: Q, revalidator: Arc<dyn PathRevalidator + Send + Sync>) -> Self {
        Self { query, revalidator }
    }
}

#[async_trait]
impl<Q> RevalidateContentUseCase for RevalidateContentService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<String>, RevalidateContentError> {
        let mut revalidated = Vec::new();

        // Static routes are marked before the slug query; a failing query
        // does not undo them.
        for path in STATIC_PATHS {
            self.revalidator.revalidate_path(path).await;
            revalidated.push(path.to_string());
        }

        let slugs = self
            .query
            .blog_slugs()
            .await
            .map_err(|e| RevalidateContentError::SlugQueryFailed(e.to_string()))?;

        for slug in slugs {
            let path = format!("/blog/{}", slug);
            self.revalidator.revalidate_path(&path).await;
            revalidated.push(path);
        }

        info!(count = revalidated.len(), "revalidated content paths");
        Ok(revalidated)
    }
}
