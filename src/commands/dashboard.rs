use serde_json::json;

use super::{CommandOutput, connect, render_state};
use crate::cli::OutputOptions;
use crate::dashboard::Dashboard;
use crate::error::{BugboardError, Result};
use crate::filter::FilterState;
use crate::mutation::NeverConfirm;
use crate::sync::CycleOutcome;

/// Run one synchronization cycle and print the resulting dashboard
pub async fn cmd_dashboard(filter: FilterState, output: OutputOptions) -> Result<()> {
    let (config, api) = connect()?;
    let dashboard = Dashboard::new(api, NeverConfirm, config.source_tag()).with_filter(filter);

    if let CycleOutcome::Failed(message) = dashboard.activate().await {
        return Err(BugboardError::Other(message));
    }

    let state = dashboard.state();
    let cards = dashboard.stat_cards();
    let bugs = dashboard.bug_views();

    CommandOutput::new(json!({
        "filter": dashboard.filter(),
        "cards": cards,
        "bugs": bugs,
    }))
    .with_text(format!(
        "{}\n\n{}",
        dashboard.filter(),
        render_state(&state, &cards, &bugs)
    ))
    .print(output)
}
