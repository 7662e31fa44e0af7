// src/config.rs
use std::env;
use std::time::Duration;

const DEFAULT_DATASET: &str = "production";
const DEFAULT_API_VERSION: &str = "2024-12-23";
const DEFAULT_RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub content: ContentConfig,
    pub relay: RelayConfig,
    pub cache: CacheConfig,
    pub site: SiteConfig,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Connection settings for the CMS query API.
#[derive(Debug, Clone)]
pub struct ContentConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub token: Option<String>,
    pub use_cdn: bool,
    /// Replaces `https://{project}.api.sanity.io`, mostly for local mocks.
    pub base_url: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub endpoint: String,
    pub access_key: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub home_revalidate: Duration,
}

/// Static copy shown around the CMS content.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub owner_name: String,
    pub brand: String,
    pub tagline: String,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub email: Option<String>,
    pub resume_url: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            description: "Projects, writing and experience.".to_string(),
            owner_name: "Portfolio Owner".to_string(),
            brand: "Portfolio".to_string(),
            tagline: "Building digital experiences that make a difference.".to_string(),
            github_url: None,
            linkedin_url: None,
            email: None,
            resume_url: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let server = ServerConfig {
            host: get("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or("PORT", get("PORT"), 8080)?,
        };

        let content = ContentConfig {
            project_id: get("SANITY_PROJECT_ID").ok_or(ConfigError::Missing("SANITY_PROJECT_ID"))?,
            dataset: get("SANITY_DATASET").unwrap_or_else(|| DEFAULT_DATASET.to_string()),
            api_version: get("SANITY_API_VERSION")
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            token: get("SANITY_API_TOKEN"),
            use_cdn: parse_bool("SANITY_USE_CDN", get("SANITY_USE_CDN"), false)?,
            base_url: get("SANITY_API_BASE_URL"),
            timeout: Duration::from_secs(parse_or(
                "CONTENT_TIMEOUT_SECS",
                get("CONTENT_TIMEOUT_SECS"),
                10,
            )?),
        };

        let relay = RelayConfig {
            endpoint: get("WEB3FORMS_ENDPOINT").unwrap_or_else(|| DEFAULT_RELAY_ENDPOINT.to_string()),
            access_key: get("WEB3FORMS_ACCESS_KEY")
                .ok_or(ConfigError::Missing("WEB3FORMS_ACCESS_KEY"))?,
            timeout: Duration::from_secs(parse_or(
                "WEB3FORMS_TIMEOUT_SECS",
                get("WEB3FORMS_TIMEOUT_SECS"),
                10,
            )?),
        };

        let cache = CacheConfig {
            home_revalidate: Duration::from_secs(parse_or(
                "HOME_REVALIDATE_SECS",
                get("HOME_REVALIDATE_SECS"),
                60,
            )?),
        };

        let defaults = SiteConfig::default();
        let site = SiteConfig {
            title: get("SITE_TITLE").unwrap_or(defaults.title),
            description: get("SITE_DESCRIPTION").unwrap_or(defaults.description),
            owner_name: get("SITE_OWNER_NAME").unwrap_or(defaults.owner_name),
            brand: get("SITE_BRAND").unwrap_or(defaults.brand),
            tagline: get("SITE_TAGLINE").unwrap_or(defaults.tagline),
            github_url: get("SITE_GITHUB_URL"),
            linkedin_url: get("SITE_LINKEDIN_URL"),
            email: get("SITE_EMAIL"),
            resume_url: get("SITE_RESUME_URL"),
        };

        let log_format = match get("LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "LOG_FORMAT",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            server,
            content,
            relay,
            cache,
            site,
            log_format,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

fn parse_bool(key: &'static str, raw: Option<String>, default: bool) -> Result<bool, ConfigError> {
    match raw.as_deref().map(str::trim) {
        None => Ok(default),
        Some("1") | Some("true") | Some("yes") => Ok(true),
        Some("0") | Some("false") | Some("no") => Ok(false),
        Some(other) => Err(ConfigError::Invalid {
            key,
            value: other.to_string(),
        }),
    }
}
