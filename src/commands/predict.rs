use serde_json::json;

use super::{CommandOutput, connect, paint};
use crate::cli::OutputOptions;
use crate::error::Result;
use crate::remote::BugApi;
use crate::utils::validation::validate_submission;
use crate::view::{format_confidence, severity_color};

/// Ask the classifier for a severity without creating a bug
pub async fn cmd_predict(title: &str, description: &str, output: OutputOptions) -> Result<()> {
    validate_submission(title, description)?;

    let (_, api) = connect()?;
    let prediction = api.predict(title.trim(), description.trim()).await?;

    let severity = paint(
        prediction.severity.as_str(),
        severity_color(Some(&prediction.severity)),
    );
    let mut text = format!("Predicted severity: {severity}");
    if let Some(confidence) = format_confidence(Some(prediction.confidence)) {
        text.push_str(&format!(" ({confidence} confidence)"));
    }
    if let Some(dev) = &prediction.suggested_developer {
        text.push_str(&format!("\nSuggested developer: {dev}"));
    }
    if let Some(reasoning) = &prediction.reasoning {
        text.push_str(&format!("\n{reasoning}"));
    }

    CommandOutput::new(json!(prediction))
        .with_text(text)
        .print(output)
}
