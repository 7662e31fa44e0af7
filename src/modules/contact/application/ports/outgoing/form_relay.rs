use async_trait::async_trait;

use crate::modules::contact::application::domain::contact_form::ContactSubmission;

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum RelayError {
    #[error("Relay request failed: {0}")]
    Transport(String),

    #[error("Relay rejected submission with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Third-party service that forwards contact messages to the site owner.
#[async_trait]
pub trait FormRelay: Send + Sync {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), RelayError>;
}
