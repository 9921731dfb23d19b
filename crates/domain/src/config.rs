//! Deployment configuration

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    BINARY_PATH, DEFAULT_DATABASE_PATH, DEFAULT_FILTER_SCHEMES, DEFAULT_HTTP_TIMEOUT_SECS,
};
use crate::errors::{CantoError, Result};

/// Settings for talking to one Canto tenant.
///
/// Immutable once loaded; callers that need different settings build a new
/// client from a new value.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CantoConfig {
    /// Base URL of the tenant API, without trailing slash.
    pub api_url: String,
    pub app_id: String,
    pub app_secret: String,
    /// OAuth authorize endpoint.
    pub oauth_url: String,
    /// OAuth token endpoint.
    pub oauth_token_url: String,
    /// Scheme filter passed to album and search listings.
    #[serde(default = "default_filter_schemes")]
    pub filter_schemes: String,
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
    /// Secret mixed into OAuth `state` values. Falls back to `app_secret`.
    #[serde(default)]
    pub state_secret: Option<String>,
    #[serde(default = "default_database_path")]
    pub database_path: String,
}

fn default_filter_schemes() -> String {
    DEFAULT_FILTER_SCHEMES.to_string()
}

fn default_http_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}

fn default_database_path() -> String {
    DEFAULT_DATABASE_PATH.to_string()
}

impl CantoConfig {
    /// Config with the five required settings and defaults for the rest.
    pub fn new(
        api_url: impl Into<String>,
        app_id: impl Into<String>,
        app_secret: impl Into<String>,
        oauth_url: impl Into<String>,
        oauth_token_url: impl Into<String>,
    ) -> Self {
        Self {
            api_url: api_url.into(),
            app_id: app_id.into(),
            app_secret: app_secret.into(),
            oauth_url: oauth_url.into(),
            oauth_token_url: oauth_token_url.into(),
            filter_schemes: default_filter_schemes(),
            http_timeout_secs: default_http_timeout_secs(),
            state_secret: None,
            database_path: default_database_path(),
        }
    }

    /// Check required fields and normalise `api_url`.
    ///
    /// # Errors
    /// Returns `CantoError::Config` when a required field is empty, a URL is
    /// not http(s), or the timeout is zero.
    pub fn validate(mut self) -> Result<Self> {
        for (name, value) in [
            ("api_url", &self.api_url),
            ("app_id", &self.app_id),
            ("app_secret", &self.app_secret),
            ("oauth_url", &self.oauth_url),
            ("oauth_token_url", &self.oauth_token_url),
        ] {
            if value.trim().is_empty() {
                return Err(CantoError::Config(format!("{name} must not be empty")));
            }
        }

        for (name, value) in [
            ("api_url", &self.api_url),
            ("oauth_url", &self.oauth_url),
            ("oauth_token_url", &self.oauth_token_url),
        ] {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(CantoError::Config(format!("{name} must be an http(s) URL: {value}")));
            }
        }

        if self.http_timeout_secs == 0 {
            return Err(CantoError::Config("http_timeout_secs must be greater than 0".into()));
        }

        let trimmed = self.api_url.trim_end_matches('/').len();
        self.api_url.truncate(trimmed);
        Ok(self)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Secret used to derive OAuth `state` values.
    pub fn state_secret(&self) -> &str {
        match self.state_secret.as_deref() {
            Some(secret) if !secret.is_empty() => secret,
            _ => &self.app_secret,
        }
    }

    /// Absolute URL for an API path such as `/api/v1/tree`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// Prefix every binary URL handed to the client must start with.
    pub fn binary_prefix(&self) -> String {
        self.endpoint(BINARY_PATH)
    }
}

impl fmt::Debug for CantoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CantoConfig")
            .field("api_url", &self.api_url)
            .field("app_id", &self.app_id)
            .field("app_secret", &"[REDACTED]")
            .field("oauth_url", &self.oauth_url)
            .field("oauth_token_url", &self.oauth_token_url)
            .field("filter_schemes", &self.filter_schemes)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("database_path", &self.database_path)
            .finish_non_exhaustive()
    }
}
