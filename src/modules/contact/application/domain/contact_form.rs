use email_address::EmailAddress;
use serde::{Deserialize, Serialize};

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill out all fields before submitting.")]
    EmptyFields,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    /// Relay rejected the message or could not be reached.
    #[error("Oops! Something went wrong. Please try again.")]
    RelayFailed,
}

/// What the visitor typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactFields {
    pub fn validate(&self) -> Result<(), ContactError> {
        let any_empty = [&self.name, &self.email, &self.message]
            .iter()
            .any(|f| f.trim().is_empty());
        if any_empty {
            return Err(ContactError::EmptyFields);
        }
        if !EmailAddress::is_valid(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

/// Body posted to the form relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub access_key: String,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(access_key: &str, fields: &ContactFields) -> Self {
        Self {
            access_key: access_key.to_string(),
            name: fields.name.trim().to_string(),
            email: fields.email.trim().to_string(),
            message: fields.message.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    Success(String),
    Error(ContactError),
}

impl ContactOutcome {
    pub fn message(&self) -> String {
        match self {
            ContactOutcome::Success(msg) => msg.clone(),
            ContactOutcome::Error(err) => err.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContactFormState {
    #[default]
    Idle,
    Submitting,
    Done(ContactOutcome),
}

/// Form contents plus where the submission stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub fields: ContactFields,
    pub state: ContactFormState,
}

impl ContactForm {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn submitting(fields: ContactFields) -> Self {
        Self {
            fields,
            state: ContactFormState::Submitting,
        }
    }

    /// Success clears the fields; errors keep them for another attempt.
    pub fn finish(self, outcome: ContactOutcome) -> Self {
        let fields = match outcome {
            ContactOutcome::Success(_) => ContactFields::default(),
            ContactOutcome::Error(_) => self.fields,
        };
        Self {
            fields,
            state: ContactFormState::Done(outcome),
        }
    }

    pub fn outcome(&self) -> Option<&ContactOutcome> {
        match &self.state {
            ContactFormState::Done(outcome) => Some(outcome),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, email: &str, message: &str) -> ContactFields {
        ContactFields {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn whitespace_only_field_counts_as_empty() {
        assert_eq!(
            fields("Ada", "ada@example.com", "   ").validate(),
            Err(ContactError::EmptyFields)
        );
    }

    #[test]
    fn malformed_email_is_rejected() {
        assert_eq!(
            fields("Ada", "not-an-email", "Hi").validate(),
            Err(ContactError::InvalidEmail)
        );
        assert_eq!(fields("Ada", "ada@example.com", "Hi").validate(), Ok(()));
    }

    #[test]
    fn finish_clears_fields_only_on_success() {
        let filled = fields("Ada", "ada@example.com", "Hi");

        let failed = ContactForm::submitting(filled.clone())
            .finish(ContactOutcome::Error(ContactError::RelayFailed));
        assert_eq!(failed.fields, filled);

        let sent = ContactForm::submitting(filled)
            .finish(ContactOutcome::Success(SUCCESS_MESSAGE.to_string()));
        assert_eq!(sent.fields, ContactFields::default());
        assert_eq!(sent.outcome().unwrap().message(), SUCCESS_MESSAGE);
    }

    #[test]
    fn submission_serializes_relay_fields() {
        let submission = ContactSubmission::new("key-1", &fields(" Ada ", "ada@example.com", "Hi"));

        assert_eq!(
            serde_json::to_value(&submission).unwrap(),
            serde_json::json!({
                "access_key": "key-1",
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Hi"
            })
        );
    }
}
