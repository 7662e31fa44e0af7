use async_trait::async_trait;
use reqwest::{header, Url};
use tracing::debug;

use crate::config::RelayConfig;
use crate::modules::contact::application::{
    domain::contact_form::ContactSubmission,
    ports::outgoing::{FormRelay, RelayError},
};

/// Posts submissions as JSON to the Web3Forms submit endpoint.
#[derive(Debug, Clone)]
pub struct Web3FormsRelay {
    http: reqwest::Client,
    endpoint: Url,
}

impl Web3FormsRelay {
    pub fn new(config: &RelayConfig) -> Result<Self, RelayError> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| RelayError::Transport(format!("{}: {}", config.endpoint, e)))?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RelayError::Transport(e.to_string()))?;
        Ok(Self { http, endpoint })
    }
}

#[async_trait]
impl FormRelay for Web3FormsRelay {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), RelayError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .header(header::ACCEPT, "application/json")
            .json(submission)
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = status.as_u16(), "relay accepted submission");
        Ok(())
    }
}
