use actix_web::{get, http::StatusCode, web, Responder};

use super::page_error::map_page_error;
use crate::modules::pages::adapter::incoming::web::views;
use crate::shared::web::html_response;
use crate::AppState;

#[get("/")]
pub async fn home_handler(data: web::Data<AppState>) -> impl Responder {
    const PATH: &str = "/";

    if let Some(html) = data.page_cache.get(PATH).await {
        return html_response(StatusCode::OK, html);
    }

    let generation = data.page_cache.generation(PATH).await;
    match data.pages.home.execute().await {
        Ok(page) => {
            let html = views::home::render(&data.site, &page).into_string();
            data.page_cache
                .store_if_unchanged(PATH, generation, html.clone(), data.home_cache_policy)
                .await;
            html_response(StatusCode::OK, html)
        }
        Err(err) => map_page_error(&data.site, PATH, err, "Page not found"),
    }
}
