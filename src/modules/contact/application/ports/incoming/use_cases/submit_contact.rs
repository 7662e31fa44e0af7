use async_trait::async_trait;

use crate::modules::contact::application::domain::contact_form::{ContactFields, ContactForm};

/// Runs one submission through the form state machine. The returned form is
/// always `Done`; failures are reported through its outcome.
#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(&self, fields: ContactFields) -> ContactForm;
}
