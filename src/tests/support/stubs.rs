use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::modules::contact::application::{
    domain::contact_form::ContactSubmission,
    ports::outgoing::{FormRelay, RelayError},
};
use crate::modules::content::application::{
    domain::entities::{BlogPost, Profile, Project},
    ports::outgoing::{
        ContentClient, ContentClientError, ContentQuery, ContentQueryError, ProjectListing,
        QueryParams,
    },
};
use crate::modules::revalidation::application::ports::incoming::use_cases::{
    RevalidateContentError, RevalidateContentUseCase,
};
use crate::modules::revalidation::application::ports::outgoing::PathRevalidator;

/* --------------------------------------------------
 * ContentQuery
 * -------------------------------------------------- */

/// In-memory `ContentQuery`. Every call is recorded by name so tests can
/// assert which queries a page issued.
#[derive(Clone, Default)]
pub struct StubContentQuery {
    profile: Option<Profile>,
    roles: Vec<String>,
    projects: Vec<Project>,
    blog_posts: Vec<BlogPost>,
    slugs: Vec<String>,
    failure: Option<String>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl StubContentQuery {
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn with_roles(mut self, roles: &[&str]) -> Self {
        self.roles = roles.iter().map(|r| r.to_string()).collect();
        self
    }

    pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
        self.projects = projects;
        self
    }

    pub fn with_blog_posts(mut self, posts: Vec<BlogPost>) -> Self {
        self.blog_posts = posts;
        self
    }

    pub fn with_slugs(mut self, slugs: &[&str]) -> Self {
        self.slugs = slugs.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Every query fails with a transport error carrying `msg`.
    pub fn failing(mut self, msg: &str) -> Self {
        self.failure = Some(msg.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), ContentQueryError> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(msg) => Err(ContentQueryError::Client(ContentClientError::Transport(
                msg.clone(),
            ))),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ContentQuery for StubContentQuery {
    async fn profile(&self) -> Result<Option<Profile>, ContentQueryError> {
        self.record("profile".to_string())?;
        Ok(self.profile.clone())
    }

    async fn hero_roles(&self) -> Result<Vec<String>, ContentQueryError> {
        self.record("hero_roles".to_string())?;
        Ok(self.roles.clone())
    }

    async fn projects(&self, listing: ProjectListing) -> Result<Vec<Project>, ContentQueryError> {
        self.record(format!("projects({:?})", listing))?;
        Ok(match listing {
            ProjectListing::Latest(n) => self.projects.iter().take(n).cloned().collect(),
            ProjectListing::All => self.projects.clone(),
        })
    }

    async fn blog_posts(&self) -> Result<Vec<BlogPost>, ContentQueryError> {
        self.record("blog_posts".to_string())?;
        Ok(self.blog_posts.clone())
    }

    async fn blog_post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, ContentQueryError> {
        self.record(format!("blog_post_by_slug({})", slug))?;
        Ok(self
            .blog_posts
            .iter()
            .find(|p| p.slug.as_deref() == Some(slug))
            .cloned())
    }

    async fn blog_slugs(&self) -> Result<Vec<String>, ContentQueryError> {
        self.record("blog_slugs".to_string())?;
        Ok(self.slugs.clone())
    }
}

/* --------------------------------------------------
 * ContentClient
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubContentClient {
    result: Result<Value, ContentClientError>,
}

impl StubContentClient {
    pub fn returning(value: Value) -> Self {
        Self { result: Ok(value) }
    }

    pub fn unreachable() -> Self {
        Self {
            result: Err(ContentClientError::Transport("connection refused".to_string())),
        }
    }
}

#[async_trait]
impl ContentClient for StubContentClient {
    async fn fetch(&self, _query: &str, _params: &QueryParams) -> Result<Value, ContentClientError> {
        self.result.clone()
    }
}

/* --------------------------------------------------
 * Revalidation
 * -------------------------------------------------- */

#[derive(Clone, Default)]
pub struct RecordingRevalidator {
    paths: Arc<Mutex<Vec<String>>>,
}

impl RecordingRevalidator {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

#[async_trait]
impl PathRevalidator for RecordingRevalidator {
    async fn revalidate_path(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_string());
    }
}

pub struct StubRevalidateContentUseCase;

#[async_trait]
impl RevalidateContentUseCase for StubRevalidateContentUseCase {
    async fn execute(&self) -> Result<Vec<String>, RevalidateContentError> {
        Ok(vec![])
    }
}

/* --------------------------------------------------
 * Contact relay
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubFormRelay {
    result: Result<(), RelayError>,
    submissions: Arc<Mutex<Vec<ContactSubmission>>>,
}

impl StubFormRelay {
    pub fn accepting() -> Self {
        Self {
            result: Ok(()),
            submissions: Arc::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: Err(RelayError::Rejected {
                status: 500,
                body: "relay unavailable".to_string(),
            }),
            submissions: Arc::default(),
        }
    }

    pub fn submissions(&self) -> Vec<ContactSubmission> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl FormRelay for StubFormRelay {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), RelayError> {
        self.submissions.lock().unwrap().push(submission.clone());
        self.result.clone()
    }
}
