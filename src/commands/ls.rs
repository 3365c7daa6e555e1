use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{CommandOutput, EMPTY_LIST_MESSAGE, connect};
use crate::cli::OutputOptions;
use crate::error::Result;
use crate::filter::FilterState;
use crate::remote::BugApi;
use crate::view::{BugView, bug_views};

#[derive(Tabled)]
struct BugRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Severity")]
    severity: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Confidence")]
    confidence: String,
}

impl From<&BugView> for BugRow {
    fn from(bug: &BugView) -> Self {
        BugRow {
            id: bug.id,
            severity: bug.severity_label.clone(),
            status: bug.status_label.clone(),
            title: bug.title.clone(),
            source: bug.source.clone(),
            confidence: bug.confidence.clone().unwrap_or_default(),
        }
    }
}

/// List bugs matching the filter, in the order the service returns them
pub async fn cmd_ls(filter: FilterState, output: OutputOptions) -> Result<()> {
    let (_, api) = connect()?;
    let bugs = api.list_bugs(&filter).await?;
    let views = bug_views(&bugs);

    let text = if views.is_empty() {
        EMPTY_LIST_MESSAGE.to_string()
    } else {
        let rows: Vec<BugRow> = views.iter().map(BugRow::from).collect();
        let mut table = Table::new(rows);
        table.with(Style::modern());
        format!("{filter}\n{table}")
    };

    CommandOutput::new(json!({
        "filter": filter,
        "bugs": views,
    }))
    .with_text(text)
    .print(output)
}
