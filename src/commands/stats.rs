use serde_json::json;

use super::{CommandOutput, connect, format_stat_cards};
use crate::cli::OutputOptions;
use crate::error::Result;
use crate::remote::BugApi;
use crate::view::stat_cards;

/// Show totals and per-severity counts across all bugs
pub async fn cmd_stats(output: OutputOptions) -> Result<()> {
    let (_, api) = connect()?;
    let stats = api.fetch_stats().await?;
    let cards = stat_cards(Some(&stats));

    let mut text = format_stat_cards(&cards);
    let pending = stats.pending_classification();
    if pending > 0 {
        text.push_str(&format!("\n{pending} awaiting classification"));
    }
    if let (Some(open), Some(closed)) = (stats.open_bugs, stats.closed_bugs) {
        text.push_str(&format!("\nOpen: {open}  Closed: {closed}"));
    }

    CommandOutput::new(json!({
        "stats": stats,
        "cards": cards,
    }))
    .with_text(text)
    .print(output)
}
