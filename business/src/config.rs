use std::env::vars;
use std::time::Duration;

use anyhow::Context as _;
use serde::Deserialize;
use ustr::Ustr;

pub const DEFAULT_PAGE_SIZE: u64 = 25;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_PAGE_SIZE: u64 = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    api_base_url: String,
    /// Bearer token sent with every API request, when set.
    api_token: Option<String>,
    page_size: u64,
    request_timeout: Duration,
    /// Capabilities granted to the signed-in operator.
    authorizations: Vec<String>,
}

// Intermediate struct for environment variables; everything but the base URL
// is optional and defaulted in `from_raw`.
#[derive(Deserialize)]
struct RawConfig {
    api_base_url: String,
    api_token: Option<String>,
    page_size: Option<u64>,
    request_timeout_secs: Option<u64>,
    /// Comma separated, e.g. `manages customers,views reports`.
    session_authorizations: Option<String>,
}

impl BusinessConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: normalize_base_url(&api_base_url.into()),
            api_token: None,
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            authorizations: Vec::new(),
        }
    }

    pub fn init() -> anyhow::Result<Self> {
        log::info!("Loading configuration from environment variables");

        let raw_config: RawConfig = serde_env::from_iter(vars())
            .context("API_BASE_URL must be set to the customers API root")?;
        Self::from_raw(raw_config)
    }

    fn from_raw(raw_config: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            api_base_url,
            api_token,
            page_size,
            request_timeout_secs,
            session_authorizations,
        } = raw_config;

        let api_base_url = normalize_base_url(&api_base_url);
        if api_base_url.is_empty() {
            anyhow::bail!("API_BASE_URL must not be empty");
        }

        let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            anyhow::bail!("PAGE_SIZE must be between 1 and {MAX_PAGE_SIZE}, got {page_size}");
        }

        let request_timeout = match request_timeout_secs {
            Some(0) => anyhow::bail!("REQUEST_TIMEOUT_SECS must be greater than zero"),
            Some(secs) => Duration::from_secs(secs),
            None => DEFAULT_REQUEST_TIMEOUT,
        };

        let authorizations = session_authorizations
            .as_deref()
            .map(parse_authorizations)
            .unwrap_or_default();

        Ok(Self {
            api_base_url,
            api_token: api_token.filter(|token| !token.trim().is_empty()),
            page_size,
            request_timeout,
            authorizations,
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_authorizations<I, S>(mut self, authorizations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authorizations = authorizations.into_iter().map(Into::into).collect();
        self
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Full URL for `path` under the API root.
    pub fn endpoint(&self, path: &str) -> Ustr {
        Ustr::from(&format!(
            "{}/{}",
            self.api_base_url,
            path.trim_start_matches('/')
        ))
    }

    pub fn api_token(&self) -> Option<&str> {
        self.api_token.as_deref()
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn authorizations(&self) -> &[String] {
        &self.authorizations
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_owned()
}

fn parse_authorizations(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|capability| !capability.is_empty())
        .map(str::to_owned)
        .collect()
}
