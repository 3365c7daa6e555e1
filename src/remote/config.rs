//! Connection settings for the bug service client.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{BugboardError, Result};

/// Endpoint used when running against a local development backend.
pub const DEVELOPMENT_BASE_URL: &str = "http://localhost:8000";

/// Every request fails as a network error after this long.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Deployment environment, which selects the default endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    /// Served from the same origin as the backend; the origin must be configured.
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl FromStr for Environment {
    type Err = BugboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(BugboardError::Config(format!(
                "unknown environment '{s}', expected 'development' or 'production'"
            ))),
        }
    }
}

/// Explicit client configuration handed to [`super::HttpBugApi::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Parse a base URL string. Only http and https are accepted.
    pub fn from_base_url(base_url: &str) -> Result<Self> {
        let url = Url::parse(base_url.trim()).map_err(|e| {
            BugboardError::Config(format!("invalid base URL '{base_url}': {e}"))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(BugboardError::Config(format!(
                "base URL '{base_url}' must use http or https"
            )));
        }
        Ok(Self::new(url))
    }

    pub fn development() -> Self {
        Self::from_base_url(DEVELOPMENT_BASE_URL).expect("development URL is valid")
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve an absolute endpoint URL for `path` (which starts with `/`).
    ///
    /// Any path prefix on the base URL is kept, so a base of
    /// `https://host/tracker` maps `/api/bugs` to `https://host/tracker/api/bugs`.
    pub fn endpoint(&self, path: &str) -> std::result::Result<Url, url::ParseError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}{path}"))
    }
}
