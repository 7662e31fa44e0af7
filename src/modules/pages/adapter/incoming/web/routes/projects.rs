use actix_web::{get, http::StatusCode, web, Responder};

use super::page_error::map_page_error;
use crate::modules::pages::adapter::incoming::web::views;
use crate::shared::{cache::CachePolicy, web::html_response};
use crate::AppState;

#[get("/projects")]
pub async fn projects_handler(data: web::Data<AppState>) -> impl Responder {
    const PATH: &str = "/projects";

    if let Some(html) = data.page_cache.get(PATH).await {
        return html_response(StatusCode::OK, html);
    }

    let generation = data.page_cache.generation(PATH).await;
    match data.pages.projects.execute().await {
        Ok(projects) => {
            let html = views::projects::render(&data.site, &projects).into_string();
            data.page_cache
                .store_if_unchanged(
                    PATH,
                    generation,
                    html.clone(),
                    CachePolicy::UntilRevalidated,
                )
                .await;
            html_response(StatusCode::OK, html)
        }
        Err(err) => map_page_error(&data.site, PATH, err, "Page not found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder, content_fixtures::project, stubs::StubContentQuery,
    };

    #[actix_web::test]
    async fn cached_until_revalidated() {
        let query = StubContentQuery::default().with_projects(vec![project("p1", "Compiler")]);
        let state = TestAppStateBuilder::default()
            .with_content_query(query.clone())
            .build();
        let cache = state.page_cache.clone();
        let app = test::init_service(App::new().app_data(state).service(projects_handler)).await;

        let first = test::call_service(&app, test::TestRequest::get().uri("/projects").to_request()).await;
        assert_eq!(first.status(), StatusCode::OK);
        let _ = test::call_service(&app, test::TestRequest::get().uri("/projects").to_request()).await;
        assert_eq!(query.calls().len(), 1);

        assert!(cache.mark_stale("/projects").await);
        let third = test::call_service(&app, test::TestRequest::get().uri("/projects").to_request()).await;

        assert_eq!(third.status(), StatusCode::OK);
        assert_eq!(query.calls().len(), 2);
    }
}
