use actix_web::{get, http::StatusCode, web, Responder};

use super::page_error::map_page_error;
use crate::modules::pages::adapter::incoming::web::views;
use crate::shared::{cache::CachePolicy, web::html_response};
use crate::AppState;

#[get("/blog")]
pub async fn blog_index_handler(data: web::Data<AppState>) -> impl Responder {
    const PATH: &str = "/blog";

    if let Some(html) = data.page_cache.get(PATH).await {
        return html_response(StatusCode::OK, html);
    }

    let generation = data.page_cache.generation(PATH).await;
    match data.pages.blog_index.execute().await {
        Ok(posts) => {
            let html = views::blog::render_index(&data.site, &posts).into_string();
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

#[get("/blog/{slug}")]
pub async fn blog_post_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();
    let page_path = format!("/blog/{}", slug);

    if let Some(html) = data.page_cache.get(&page_path).await {
        return html_response(StatusCode::OK, html);
    }

    let generation = data.page_cache.generation(&page_path).await;
    match data.pages.blog_post.execute(&slug).await {
        Ok(post) => {
            let html = views::blog::render_post(&data.site, &page_path, &post).into_string();
            data.page_cache
                .store_if_unchanged(
                    &page_path,
                    generation,
                    html.clone(),
                    CachePolicy::UntilRevalidated,
                )
                .await;
            html_response(StatusCode::OK, html)
        }
        Err(err) => map_page_error(&data.site, &page_path, err, "Blog not found"),
    }
}
