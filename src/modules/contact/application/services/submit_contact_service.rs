use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::modules::contact::application::{
    domain::contact_form::{
        ContactError, ContactFields, ContactForm, ContactOutcome, ContactSubmission,
        SUCCESS_MESSAGE,
    },
    ports::{incoming::use_cases::SubmitContactUseCase, outgoing::FormRelay},
};

#[derive(Clone)]
pub struct SubmitContactService {
    relay: Arc<dyn FormRelay + Send + Sync>,
    access_key: String,
}

impl fmt::Debug for SubmitContactService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmitContactService")
            .field("relay", &"<dyn FormRelay>")
            .field("access_key", &"<redacted>")
            .finish()
    }
}

impl SubmitContactService {
    pub fn new(relay: Arc<dyn FormRelay + Send + Sync>, access_key: impl Into<String>) -> Self {
        Self {
            relay,
            access_key: access_key.into(),
        }
    }
}

#[async_trait]
impl SubmitContactUseCase for SubmitContactService {
    async fn execute(&self, fields: ContactFields) -> ContactForm {
        let form = ContactForm::submitting(fields);

        if let Err(err) = form.fields.validate() {
            return form.finish(ContactOutcome::Error(err));
        }

        let submission = ContactSubmission::new(&self.access_key, &form.fields);
        match self.relay.submit(&submission).await {
            Ok(()) => {
                info!("Contact message relayed");
                form.finish(ContactOutcome::Success(SUCCESS_MESSAGE.to_string()))
            }
            Err(err) => {
                error!("Failed to relay contact message: {}", err);
                form.finish(ContactOutcome::Error(ContactError::RelayFailed))
            }
        }
    }
}
