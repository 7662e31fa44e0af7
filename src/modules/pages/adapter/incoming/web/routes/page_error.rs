use actix_web::{http::StatusCode, HttpResponse};
use tracing::error;

use crate::config::SiteConfig;
use crate::modules::pages::application::ports::incoming::use_cases::PageError;
use crate::shared::web::status_page;

pub const SERVER_ERROR_TEXT: &str = "Something went wrong";

/// Maps a page use case error to its status page. `not_found` is the message
/// for a missing document on this route.
pub fn map_page_error(
    site: &SiteConfig,
    path: &str,
    err: PageError,
    not_found: &str,
) -> HttpResponse {
    match err {
        PageError::InvalidSlug => status_page(site, path, StatusCode::BAD_REQUEST, "Invalid slug"),
        PageError::NotFound => status_page(site, path, StatusCode::NOT_FOUND, not_found),
        PageError::ContentUnavailable(msg) => {
            error!("Failed to render {}: {}", path, msg);
            status_page(
                site,
                path,
                StatusCode::INTERNAL_SERVER_ERROR,
                SERVER_ERROR_TEXT,
            )
        }
    }
}
