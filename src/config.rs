use std::time::Duration;

use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.modular.name/public/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("invalid base url `{0}`: `{1}`")]
    InvalidBaseUrl(String, String),
}

/// Settings shared read-only by every request issued from one
/// [`IdentityClient`](crate::client::IdentityClient).
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Root URL every endpoint path is appended to.
    base_url: Url,
    /// Maximum time to wait for a response.
    timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: Url, timeout: Duration) -> Self {
        Self::default().with_base_url(base_url).with_timeout(timeout)
    }

    /// Builds a configuration from raw values. An empty url or a zero timeout
    /// fall back to their defaults.
    pub fn try_from_parts(base_url: &str, timeout_ms: u64) -> Result<Self, ConfigError> {
        let config = Self::default().with_timeout(Duration::from_millis(timeout_ms));
        if base_url.is_empty() {
            return Ok(config);
        }
        Ok(config.with_base_url(parse_base_url(base_url)?))
    }

    pub fn with_base_url(self, base_url: Url) -> Self {
        Self { base_url, ..self }
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        let timeout = if timeout.is_zero() {
            DEFAULT_TIMEOUT
        } else {
            timeout
        };
        Self { timeout, ..self }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

fn parse_base_url(s: &str) -> Result<Url, ConfigError> {
    let url =
        Url::parse(s).map_err(|err| ConfigError::InvalidBaseUrl(s.to_string(), err.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidBaseUrl(
            s.to_string(),
            "url cannot be used as a base".to_string(),
        ));
    }
    Ok(url)
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("Failed to parse known URL: DEFAULT_BASE_URL")
}
