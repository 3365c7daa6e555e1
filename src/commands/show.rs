use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandOutput, connect, format_bug_line};
use crate::cli::OutputOptions;
use crate::error::Result;
use crate::remote::BugApi;
use crate::types::BugId;
use crate::view::BugView;

/// Display a single bug with its description
pub async fn cmd_show(id: BugId, output: OutputOptions) -> Result<()> {
    let (_, api) = connect()?;
    let bug = api.get_bug(id).await?;
    let view = BugView::from(&bug);

    let mut text = format_bug_line(&view);
    text.push_str("\n\n");
    text.push_str(&view.description);
    text.push('\n');

    let mut field = |label: &str, value: &str| {
        text.push_str(&format!("\n{} {}", format!("{label}:").dimmed(), value));
    };
    field("Source", &view.source);
    if let Some(dev) = &view.assigned_developer {
        field("Assigned", dev);
    }
    if let Some(confidence) = &view.confidence {
        field("Confidence", confidence);
    }
    if let Some(predicted) = &bug.predicted_severity {
        field("Predicted", predicted.as_str());
    }
    if let Some(created) = &bug.created_at {
        field("Created", created);
    }
    if let Some(updated) = &bug.updated_at {
        field("Updated", updated);
    }

    CommandOutput::new(json!({
        "bug": bug,
        "view": view,
    }))
    .with_text(text)
    .print(output)
}
