use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandOutput, connect, format_bug_line};
use crate::cli::OutputOptions;
use crate::error::Result;
use crate::mutation::{BugForm, prepare_submission};
use crate::remote::BugApi;
use crate::view::BugView;

/// Options for creating a new bug
pub struct CreateOptions {
    pub title: String,
    pub description: String,
    /// Overrides the configured source tag.
    pub source: Option<String>,
}

/// Submit a new bug report
///
/// Invalid input is rejected before the service is contacted.
pub async fn cmd_create(options: CreateOptions, output: OutputOptions) -> Result<()> {
    let (config, api) = connect()?;
    let source = options
        .source
        .unwrap_or_else(|| config.source_tag().to_string());

    let form = BugForm::new(options.title, options.description);
    let new_bug = prepare_submission(&form, &source)?;
    let bug = api.create_bug(&new_bug).await?;
    tracing::info!(id = bug.id, "bug created");
    let view = BugView::from(&bug);

    let mut text = format!("{} {}", "Created".green(), format_bug_line(&view));
    if let Some(confidence) = &view.confidence {
        text.push_str(&format!(
            "\nClassified as {} ({confidence} confidence)",
            view.severity_label
        ));
    }

    CommandOutput::new(json!({
        "action": "created",
        "bug": bug,
    }))
    .with_text(text)
    .print(output)
}
