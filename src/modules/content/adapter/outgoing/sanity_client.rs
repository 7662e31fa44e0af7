use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::config::ContentConfig;
use crate::modules::content::application::ports::outgoing::{
    ContentClient, ContentClientError, QueryParams,
};

const API_HOST: &str = "api.sanity.io";
const CDN_HOST: &str = "apicdn.sanity.io";

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: Value,
}

/// HTTP client for the hosted CMS query endpoint.
#[derive(Debug, Clone)]
pub struct SanityContentClient {
    http: reqwest::Client,
    endpoint: Url,
    token: Option<String>,
}

impl SanityContentClient {
    pub fn new(config: &ContentConfig) -> Result<Self, ContentClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ContentClientError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: query_endpoint(config)?,
            token: config.token.clone(),
        })
    }

    /// `{endpoint}?query=<groq>&$name=<json>` for each parameter.
    pub fn query_url(&self, query: &str, params: &QueryParams) -> Result<Url, ContentClientError> {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("query", query);
            for (name, value) in params {
                let encoded = serde_json::to_string(value)
                    .map_err(|e| ContentClientError::InvalidUrl(e.to_string()))?;
                pairs.append_pair(&format!("${name}"), &encoded);
            }
        }
        Ok(url)
    }
}

fn query_endpoint(config: &ContentConfig) -> Result<Url, ContentClientError> {
    let base = match &config.base_url {
        Some(base) => base.trim_end_matches('/').to_string(),
        None => {
            let host = if config.use_cdn { CDN_HOST } else { API_HOST };
            format!("https://{}.{}", config.project_id, host)
        }
    };

    let raw = format!(
        "{}/v{}/data/query/{}",
        base, config.api_version, config.dataset
    );
    Url::parse(&raw).map_err(|e| ContentClientError::InvalidUrl(format!("{raw}: {e}")))
}

#[async_trait]
impl ContentClient for SanityContentClient {
    async fn fetch(&self, query: &str, params: &QueryParams) -> Result<Value, ContentClientError> {
        let url = self.query_url(query, params)?;

        let mut request = self.http.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ContentClientError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ContentClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: QueryResponse = response
            .json()
            .await
            .map_err(|e| ContentClientError::Decode(e.to_string()))?;

        debug!(query_len = query.len(), params = params.len(), "content query ok");
        Ok(body.result)
    }
}
