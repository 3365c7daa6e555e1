use owo_colors::OwoColorize;

use super::connect;
use crate::error::Result;
use crate::mutation::{Confirm, PromptConfirm, delete_prompt};
use crate::remote::BugApi;
use crate::types::BugId;

/// Delete a bug, asking first unless `yes` is set
pub async fn cmd_delete(id: BugId, yes: bool) -> Result<()> {
    let (_, api) = connect()?;

    if !yes && !PromptConfirm.confirm(&delete_prompt(id, None)).await {
        tracing::debug!(id, "delete declined");
        println!("{}", "Cancelled".dimmed());
        return Ok(());
    }

    let confirmation = api.delete_bug(id).await?;
    tracing::info!(id, "bug deleted");

    if confirmation.message.is_empty() {
        println!("{} bug #{id}", "Deleted".green());
    } else {
        println!("{} {}", "Deleted".green(), confirmation.message);
    }
    Ok(())
}
