//! Top-level application configuration.
//!
//! Configuration is stored in `.bugboard/config.yaml` and includes:
//! - The deployment environment (development or production)
//! - The service base URL
//! - The source tag attached to submitted bugs
//!
//! `BUGBOARD_ENV` and `BUGBOARD_API_URL` override the file.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{BugboardError, Result};
use crate::remote::config::DEVELOPMENT_BASE_URL;
use crate::remote::{ClientConfig, Environment};
use crate::types::{CONFIG_DIR, SOURCE_MANUAL};

pub const ENV_ENVIRONMENT: &str = "BUGBOARD_ENV";
pub const ENV_API_URL: &str = "BUGBOARD_API_URL";

/// Keys accepted by `config get` / `config set`.
pub const CONFIG_KEYS: &[&str] = &["environment", "base_url", "source"];

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub environment: Environment,

    /// Base URL of the bug service. Required in production.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Source tag for created bugs (default: "Manual")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        PathBuf::from(CONFIG_DIR).join("config.yaml")
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Environment from `BUGBOARD_ENV`, falling back to the file.
    pub fn effective_environment(&self) -> Result<Environment> {
        match env::var(ENV_ENVIRONMENT) {
            Ok(value) if !value.is_empty() => value.parse(),
            _ => Ok(self.environment),
        }
    }

    /// Base URL from `BUGBOARD_API_URL`, then the file, then the
    /// development default. Production has no default.
    pub fn effective_base_url(&self) -> Result<String> {
        if let Ok(url) = env::var(ENV_API_URL)
            && !url.is_empty()
        {
            return Ok(url);
        }

        if let Some(url) = &self.base_url {
            return Ok(url.clone());
        }

        match self.effective_environment()? {
            Environment::Development => Ok(DEVELOPMENT_BASE_URL.to_string()),
            Environment::Production => Err(BugboardError::Config(format!(
                "production requires a base URL. Set {ENV_API_URL} or run: bugboard config set base_url <url>"
            ))),
        }
    }

    /// Resolve the explicit client configuration.
    pub fn client_config(&self) -> Result<ClientConfig> {
        ClientConfig::from_base_url(&self.effective_base_url()?)
    }

    pub fn source_tag(&self) -> &str {
        self.source.as_deref().unwrap_or(SOURCE_MANUAL)
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        match key {
            "environment" => Ok(Some(self.environment.to_string())),
            "base_url" => Ok(self.base_url.clone()),
            "source" => Ok(self.source.clone()),
            _ => Err(unknown_key(key)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "environment" => self.environment = value.parse()?,
            "base_url" => {
                ClientConfig::from_base_url(value)?;
                self.base_url = Some(value.trim().to_string());
            }
            "source" => {
                if value.trim().is_empty() {
                    return Err(BugboardError::Config("source cannot be empty".to_string()));
                }
                self.source = Some(value.trim().to_string());
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> BugboardError {
    BugboardError::Config(format!(
        "unknown config key '{key}', expected one of: {}",
        CONFIG_KEYS.join(", ")
    ))
}
