mod config;
mod create;
mod dashboard;
mod delete;
mod health;
mod ls;
mod predict;
mod render;
mod shell;
mod show;
mod stats;
mod update;

pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use create::{CreateOptions, cmd_create};
pub use dashboard::cmd_dashboard;
pub use delete::cmd_delete;
pub use health::cmd_health;
pub use ls::cmd_ls;
pub use predict::cmd_predict;
pub use render::{
    EMPTY_LIST_MESSAGE, LOADING_MESSAGE, format_bug_line, format_bug_meta, format_error_banner,
    format_stat_cards, paint, render_state,
};
pub use shell::cmd_shell;
pub use show::cmd_show;
pub use stats::cmd_stats;
pub use update::{UpdateOptions, cmd_update};

use std::sync::Arc;

use serde_json::Value;

use crate::cli::OutputOptions;
use crate::config::Config;
use crate::error::Result;
use crate::remote::HttpBugApi;

/// Output of a command that can be printed either as JSON or as text.
///
/// Without explicit text the JSON is pretty-printed in both modes.
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn print(self, output: OutputOptions) -> Result<()> {
        match self.text {
            Some(text) if !output.json => println!("{text}"),
            _ => println!("{}", serde_json::to_string_pretty(&self.json)?),
        }
        Ok(())
    }
}

/// Load the configuration and build a client for the configured service.
pub(crate) fn connect() -> Result<(Config, Arc<HttpBugApi>)> {
    let config = Config::load()?;
    let client_config = config.client_config()?;
    tracing::debug!("using bug service at {}", client_config.base_url);
    let api = HttpBugApi::new(client_config)?;
    Ok((config, Arc::new(api)))
}
