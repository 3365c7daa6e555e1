use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandOutput, connect, format_bug_line};
use crate::cli::OutputOptions;
use crate::error::Result;
use crate::mutation::prepare_update;
use crate::remote::BugApi;
use crate::types::{BugId, BugStatus, BugUpdate};
use crate::view::BugView;

/// Options for updating an existing bug
pub struct UpdateOptions {
    pub id: BugId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<BugStatus>,
    pub assigned_developer: Option<String>,
}

/// Change one or more fields of a bug
pub async fn cmd_update(options: UpdateOptions, output: OutputOptions) -> Result<()> {
    let update = prepare_update(&BugUpdate {
        title: options.title,
        description: options.description,
        status: options.status,
        assigned_developer: options.assigned_developer,
    })?;

    let (_, api) = connect()?;
    let bug = api.update_bug(options.id, &update).await?;
    tracing::info!(id = bug.id, "bug updated");

    CommandOutput::new(json!({
        "action": "updated",
        "bug": bug,
    }))
    .with_text(format!(
        "{} {}",
        "Updated".green(),
        format_bug_line(&BugView::from(&bug))
    ))
    .print(output)
}
