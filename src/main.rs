pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{AppConfig, LogFormat, SiteConfig};
use crate::modules::contact::{
    adapter::outgoing::Web3FormsRelay,
    application::{
        ports::incoming::use_cases::SubmitContactUseCase, services::SubmitContactService,
    },
};
use crate::modules::content::{
    adapter::outgoing::{GroqContentQuery, SanityContentClient},
    application::ports::outgoing::ContentClient,
};
use crate::modules::pages::application::{
    page_use_cases::PageUseCases,
    services::{
        GetAboutPageService, GetBlogIndexService, GetBlogPostService, GetHomePageService,
        GetProjectsPageService,
    },
};
use crate::modules::revalidation::application::{
    ports::incoming::use_cases::RevalidateContentUseCase, services::RevalidateContentService,
};
use crate::shared::api::custom_json_config;
use crate::shared::cache::{CachePolicy, PageCache};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub pages: PageUseCases,
    pub revalidate_content_use_case: Arc<dyn RevalidateContentUseCase + Send + Sync>,
    pub submit_contact_use_case: Arc<dyn SubmitContactUseCase + Send + Sync>,
    pub page_cache: Arc<PageCache>,
    /// Policy for `/`; the other content pages live until revalidated.
    pub home_cache_policy: CachePolicy,
    pub site: Arc<SiteConfig>,
    pub content_client: Arc<dyn ContentClient + Send + Sync>,
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,actix_web=info".into());

    let (pretty, json) = match format {
        LogFormat::Pretty => (Some(tracing_subscriber::fmt::layer()), None),
        LogFormat::Json => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(false)
                    .flatten_event(true),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(json)
        .init();
}

fn load_env_files() {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

/// Builds the shared state from configuration. No network I/O happens here.
pub fn build_state(config: &AppConfig) -> anyhow::Result<web::Data<AppState>> {
    let content_client: Arc<dyn ContentClient + Send + Sync> =
        Arc::new(SanityContentClient::new(&config.content)?);
    let query = GroqContentQuery::new(content_client.clone());
    let page_cache = Arc::new(PageCache::new());

    let pages = PageUseCases {
        home: Arc::new(GetHomePageService::new(query.clone())),
        about: Arc::new(GetAboutPageService::new(query.clone())),
        projects: Arc::new(GetProjectsPageService::new(query.clone())),
        blog_index: Arc::new(GetBlogIndexService::new(query.clone())),
        blog_post: Arc::new(GetBlogPostService::new(query.clone())),
    };

    let revalidate_content = RevalidateContentService::new(query, page_cache.clone());

    let relay = Web3FormsRelay::new(&config.relay)?;
    let submit_contact = SubmitContactService::new(Arc::new(relay), config.relay.access_key.clone());

    Ok(web::Data::new(AppState {
        pages,
        revalidate_content_use_case: Arc::new(revalidate_content),
        submit_contact_use_case: Arc::new(submit_contact),
        page_cache,
        home_cache_policy: CachePolicy::Revalidate(config.cache.home_revalidate),
        site: Arc::new(config.site.clone()),
        content_client,
    }))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    load_env_files();
    let config = AppConfig::from_env()?;
    init_tracing(config.log_format);

    info!("Starting application...");

    let state = build_state(&config)?;
    let server_url = config.server.bind_address();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);

    // pages
    cfg.service(crate::modules::pages::adapter::incoming::web::routes::home_handler);
    cfg.service(crate::modules::pages::adapter::incoming::web::routes::about_handler);
    cfg.service(crate::modules::pages::adapter::incoming::web::routes::projects_handler);
    cfg.service(crate::modules::pages::adapter::incoming::web::routes::blog_index_handler);
    cfg.service(crate::modules::pages::adapter::incoming::web::routes::blog_post_handler);

    // contact
    cfg.service(crate::modules::contact::adapter::incoming::web::routes::contact_page_handler);
    cfg.service(
        crate::modules::contact::adapter::incoming::web::routes::submit_contact_form_handler,
    );
    cfg.service(
        crate::modules::contact::adapter::incoming::web::routes::submit_contact_api_handler,
    );

    // content api
    cfg.service(crate::modules::content::adapter::incoming::web::routes::get_schema_handler);
    cfg.service(crate::modules::revalidation::adapter::incoming::web::routes::revalidate_handler);
}

fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
