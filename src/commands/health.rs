use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandOutput, connect};
use crate::cli::OutputOptions;
use crate::error::Result;
use crate::remote::BugApi;

/// Check that the configured service responds
pub async fn cmd_health(output: OutputOptions) -> Result<()> {
    let (_, api) = connect()?;
    let health = api.health().await?;
    let base_url = api.config().base_url.to_string();

    CommandOutput::new(json!({
        "base_url": base_url,
        "health": health,
    }))
    .with_text(format!(
        "{} {} ({})",
        base_url.cyan(),
        health.status.green(),
        health.timestamp.as_deref().unwrap_or("no timestamp")
    ))
    .print(output)
}
