use actix_web::{get, http::StatusCode, web, Responder};

use super::page_error::map_page_error;
use crate::modules::pages::adapter::incoming::web::views;
use crate::shared::{cache::CachePolicy, web::html_response};
use crate::AppState;

#[get("/about")]
pub async fn about_handler(data: web::Data<AppState>) -> impl Responder {
    const PATH: &str = "/about";

    if let Some(html) = data.page_cache.get(PATH).await {
        return html_response(StatusCode::OK, html);
    }

    let generation = data.page_cache.generation(PATH).await;
    match data.pages.about.execute().await {
        Ok(profile) => {
            let html = views::about::render(&data.site, &profile).into_string();
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
        Err(err) => map_page_error(&data.site, PATH, err, "Profile not found"),
    }
}
