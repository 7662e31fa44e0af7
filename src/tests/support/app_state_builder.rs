use std::sync::Arc;

use actix_web::web;
use serde_json::json;

use crate::config::SiteConfig;
use crate::modules::contact::application::{
    ports::incoming::use_cases::SubmitContactUseCase, services::SubmitContactService,
};
use crate::modules::content::application::ports::outgoing::{ContentClient, ContentQuery};
use crate::modules::pages::application::{
    page_use_cases::PageUseCases,
    services::{
        GetAboutPageService, GetBlogIndexService, GetBlogPostService, GetHomePageService,
        GetProjectsPageService,
    },
};
use crate::modules::revalidation::application::ports::incoming::use_cases::RevalidateContentUseCase;
use crate::shared::cache::{CachePolicy, PageCache};
use crate::tests::support::stubs::*;
use crate::AppState;

fn pages_over<Q>(query: Q) -> PageUseCases
where
    Q: ContentQuery + Clone + Send + Sync + 'static,
{
    PageUseCases {
        home: Arc::new(GetHomePageService::new(query.clone())),
        about: Arc::new(GetAboutPageService::new(query.clone())),
        projects: Arc::new(GetProjectsPageService::new(query.clone())),
        blog_index: Arc::new(GetBlogIndexService::new(query.clone())),
        blog_post: Arc::new(GetBlogPostService::new(query)),
    }
}

pub struct TestAppStateBuilder {
    pages: PageUseCases,
    revalidate_content: Arc<dyn RevalidateContentUseCase + Send + Sync>,
    submit_contact: Arc<dyn SubmitContactUseCase + Send + Sync>,
    page_cache: Arc<PageCache>,
    home_cache_policy: CachePolicy,
    site: SiteConfig,
    content_client: Arc<dyn ContentClient + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            pages: pages_over(StubContentQuery::default()),
            revalidate_content: Arc::new(StubRevalidateContentUseCase),
            submit_contact: Arc::new(SubmitContactService::new(
                Arc::new(StubFormRelay::accepting()),
                "test-access-key",
            )),
            page_cache: Arc::new(PageCache::new()),
            home_cache_policy: CachePolicy::UntilRevalidated,
            site: SiteConfig::default(),
            content_client: Arc::new(StubContentClient::returning(json!(1))),
        }
    }
}

impl TestAppStateBuilder {
    /// Wires every page use case to the same query stub.
    pub fn with_content_query<Q>(mut self, query: Q) -> Self
    where
        Q: ContentQuery + Clone + Send + Sync + 'static,
    {
        self.pages = pages_over(query);
        self
    }

    pub fn with_revalidate_content(
        mut self,
        uc: impl RevalidateContentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.revalidate_content = Arc::new(uc);
        self
    }

    pub fn with_submit_contact(
        mut self,
        uc: impl SubmitContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submit_contact = Arc::new(uc);
        self
    }

    pub fn with_page_cache(mut self, cache: Arc<PageCache>) -> Self {
        self.page_cache = cache;
        self
    }

    pub fn with_home_cache_policy(mut self, policy: CachePolicy) -> Self {
        self.home_cache_policy = policy;
        self
    }

    pub fn with_site(mut self, site: SiteConfig) -> Self {
        self.site = site;
        self
    }

    pub fn with_content_client(
        mut self,
        client: impl ContentClient + Send + Sync + 'static,
    ) -> Self {
        self.content_client = Arc::new(client);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            pages: self.pages,
            revalidate_content_use_case: self.revalidate_content,
            submit_contact_use_case: self.submit_contact,
            page_cache: self.page_cache,
            home_cache_policy: self.home_cache_policy,
            site: Arc::new(self.site),
            content_client: self.content_client,
        })
    }
}
