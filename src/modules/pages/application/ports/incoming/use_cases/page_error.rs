use crate::modules::content::application::ports::outgoing::ContentQueryError;

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum PageError {
    #[error("Invalid slug")]
    InvalidSlug,

    #[error("Document not found")]
    NotFound,

    #[error("Content unavailable: {0}")]
    ContentUnavailable(String),
}

impl From<ContentQueryError> for PageError {
    fn from(err: ContentQueryError) -> Self {
        PageError::ContentUnavailable(err.to_string())
    }
}
