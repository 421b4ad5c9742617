//! Constructor-time configuration for the client.

use std::env;
use std::time::Duration;

use secrecy::SecretString;
use validator::Validate;

use crate::domain::ConfigError;

pub const ENV_API_URL: &str = "SWAYE_API_URL";
pub const ENV_API_TOKEN: &str = "SWAYE_API_TOKEN";
pub const ENV_TIMEOUT_SECS: &str = "SWAYE_TIMEOUT_SECS";
pub const ENV_CONNECT_TIMEOUT_SECS: &str = "SWAYE_CONNECT_TIMEOUT_SECS";

/// Settings for [`HttpApiClient`](crate::infra::HttpApiClient) and
/// [`SwayeClient`](crate::SwayeClient).
///
/// No timeouts are applied unless set here; retries and caching are left
/// to the caller.
#[derive(Debug, Validate)]
pub struct ClientConfig {
    #[validate(url)]
    pub base_url: String,
    pub bearer_token: Option<SecretString>,
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            bearer_token: None,
            timeout: None,
            connect_timeout: None,
        }
    }

    #[must_use]
    pub fn with_bearer_token(mut self, token: impl Into<SecretString>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Load from the process environment, reading a `.env` file first if present.
    ///
    /// # Errors
    /// Returns `ConfigError` if `SWAYE_API_URL` is unset or a value fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(ENV_API_URL)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(ENV_API_URL.to_string()))?;

        let mut config = Self::new(base_url.trim());
        if let Some(token) = lookup(ENV_API_TOKEN).filter(|t| !t.is_empty()) {
            config = config.with_bearer_token(token);
        }
        config.timeout = parse_secs(&lookup, ENV_TIMEOUT_SECS)?;
        config.connect_timeout = parse_secs(&lookup, ENV_CONNECT_TIMEOUT_SECS)?;

        config.check()?;
        Ok(config)
    }

    /// Validate field formats.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` when `base_url` is not a URL.
    pub fn check(&self) -> Result<(), ConfigError> {
        self.validate().map_err(|e| ConfigError::InvalidValue {
            key: "base_url".to_string(),
            message: e.to_string(),
        })
    }
}

fn parse_secs<F>(lookup: &F, key: &str) -> Result<Option<Duration>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(|secs| Some(Duration::from_secs(secs)))
            .map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            }),
    }
}
