//! Configuration commands.
//!
//! - `config show`: effective settings after environment overrides
//! - `config set`: validate and store a value
//! - `config get`: print a stored value

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::cli::OutputOptions;
use crate::config::{Config, ENV_API_URL, ENV_ENVIRONMENT};
use crate::error::Result;

/// Show current configuration
pub fn cmd_config_show(output: OutputOptions) -> Result<()> {
    let config = Config::load()?;
    let environment = config.effective_environment()?;
    // Production without a URL is still worth displaying.
    let base_url = config.effective_base_url().ok();

    let json_output = json!({
        "environment": environment.to_string(),
        "base_url": base_url,
        "source": config.source_tag(),
        "config_file": Config::config_path().to_string_lossy(),
    });

    let mut text = String::new();
    text.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));
    text.push_str(&format!("{}: {}\n", "environment".cyan(), environment));
    match &base_url {
        Some(url) => text.push_str(&format!("{}: {}\n", "base_url".cyan(), url)),
        None => text.push_str(&format!(
            "{}: {}\n",
            "base_url".cyan(),
            "not configured".dimmed()
        )),
    }
    text.push_str(&format!("{}: {}\n", "source".cyan(), config.source_tag()));
    text.push('\n');
    text.push_str(&format!(
        "{}",
        format!(
            "Config file: {} ({ENV_ENVIRONMENT} and {ENV_API_URL} override it)",
            Config::config_path().display()
        )
        .dimmed()
    ));

    CommandOutput::new(json_output)
        .with_text(text)
        .print(output)
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, output: OutputOptions) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    let stored = config.get(key)?.unwrap_or_default();
    CommandOutput::new(json!({
        "action": "config_set",
        "key": key,
        "value": stored,
        "success": true,
    }))
    .with_text(format!("Set {} to {}", key.cyan(), stored))
    .print(output)
}

/// Get a configuration value
pub fn cmd_config_get(key: &str, output: OutputOptions) -> Result<()> {
    let config = Config::load()?;
    let value = config.get(key)?;

    CommandOutput::new(json!({
        "key": key,
        "value": value,
    }))
    .with_text(value.unwrap_or_else(|| "not set".to_string()))
    .print(output)
}
