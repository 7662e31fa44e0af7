mod revalidate_content_service;

pub use revalidate_content_service::{RevalidateContentService, STATIC_PATHS};
