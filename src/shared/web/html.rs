use actix_web::{http::header::ContentType, http::StatusCode, HttpResponse};
use maud::html;

use super::layout;
use crate::config::SiteConfig;

pub fn html_response(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body)
}

/// Full page holding a single centered message ("Blog not found" and friends).
pub fn status_page(
    site: &SiteConfig,
    current_path: &str,
    status: StatusCode,
    message: &str,
) -> HttpResponse {
    let content = html! {
        div.status-page { strong { (message) } }
    };
    let doc = layout::page(site, current_path, Some(message), content);
    html_response(status, doc.into_string())
}
