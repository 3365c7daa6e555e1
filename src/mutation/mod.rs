//! Create, update and delete operations.
//!
//! Every successful mutation is followed by a forced synchronizer cycle; the
//! displayed collection only changes through that re-fetch, never by editing
//! it locally.

pub mod confirm;

use std::sync::Arc;

use crate::error::{BugboardError, Result};
use crate::remote::BugApi;
use crate::sync::{CycleOutcome, Synchronizer};
use crate::types::{Bug, BugId, BugUpdate, NewBug};
use crate::utils::validation::{ValidationError, validate_submission, validate_update};

pub use confirm::{AlwaysConfirm, Confirm, NeverConfirm, PromptConfirm};

/// Contents of the bug submission form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BugForm {
    pub title: String,
    pub description: String,
}

impl BugForm {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty()
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
    }
}

/// Validate the form and build the request body with trimmed fields.
pub fn prepare_submission(form: &BugForm, source: &str) -> Result<NewBug> {
    validate_submission(&form.title, &form.description)?;
    Ok(NewBug {
        title: form.title.trim().to_string(),
        description: form.description.trim().to_string(),
        source: source.to_string(),
    })
}

/// Validate a partial update and trim the text fields it carries.
pub fn prepare_update(update: &BugUpdate) -> std::result::Result<BugUpdate, ValidationError> {
    validate_update(update)?;
    let trimmed = |field: &Option<String>| field.as_ref().map(|v| v.trim().to_string());
    Ok(BugUpdate {
        title: trimmed(&update.title),
        description: trimmed(&update.description),
        status: update.status.clone(),
        assigned_developer: trimmed(&update.assigned_developer),
    })
}

/// Confirmation question for deleting `id`, naming the bug when its title is known.
pub fn delete_prompt(id: BugId, title: Option<&str>) -> String {
    match title {
        Some(title) => format!("Delete bug #{id} \"{title}\"?"),
        None => format!("Delete bug #{id}?"),
    }
}

/// Result of a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The service deleted the bug; carries the outcome of the re-fetch.
    Deleted(CycleOutcome),
    /// The user declined; nothing was sent.
    Declined,
}

pub struct Mutations<A, C> {
    sync: Arc<Synchronizer<A>>,
    confirm: C,
    source: String,
}

impl<A: BugApi, C: Confirm> Mutations<A, C> {
    /// `source` tags every created bug with where it was entered.
    pub fn new(sync: Arc<Synchronizer<A>>, confirm: C, source: impl Into<String>) -> Self {
        Self {
            sync,
            confirm,
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Submit the form.
    ///
    /// Invalid input is rejected without contacting the service. On success
    /// the form is cleared and one synchronizer cycle runs; on failure the
    /// form is left as it was so the user can retry.
    pub async fn create(&self, form: &mut BugForm) -> Result<Bug> {
        let new_bug = prepare_submission(form, &self.source)?;

        if !self.sync.begin_create() {
            return Err(BugboardError::SubmissionInProgress);
        }

        let result = self.sync.api().create_bug(&new_bug).await;
        self.sync.finish_create();

        match result {
            Ok(bug) => {
                tracing::info!(id = bug.id, "bug created");
                form.clear();
                self.sync.resync().await;
                Ok(bug)
            }
            Err(err) => {
                tracing::warn!("Failed to create bug: {err}");
                self.sync.report_error(err.user_message());
                Err(err.into())
            }
        }
    }

    /// Delete a bug after confirmation.
    ///
    /// A failed delete leaves the displayed collection untouched.
    pub async fn delete(&self, id: BugId) -> Result<DeleteOutcome> {
        let state = self.sync.state();
        let prompt = delete_prompt(id, state.find_bug(id).map(|bug| bug.title.as_str()));
        if !self.confirm.confirm(&prompt).await {
            tracing::debug!(id, "delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        match self.sync.api().delete_bug(id).await {
            Ok(_) => {
                tracing::info!(id, "bug deleted");
                Ok(DeleteOutcome::Deleted(self.sync.resync().await))
            }
            Err(err) => {
                tracing::warn!("Failed to delete bug {id}: {err}");
                self.sync.report_error(err.user_message());
                Err(err.into())
            }
        }
    }

    /// Apply a partial update, then resynchronize.
    pub async fn update(&self, id: BugId, update: &BugUpdate) -> Result<Bug> {
        let update = prepare_update(update)?;

        match self.sync.api().update_bug(id, &update).await {
            Ok(bug) => {
                tracing::info!(id, "bug updated");
                self.sync.resync().await;
                Ok(bug)
            }
            Err(err) => {
                tracing::warn!("Failed to update bug {id}: {err}");
                self.sync.report_error(err.user_message());
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_clear() {
        let mut form = BugForm::new("Login fails", "User cannot log in");
        assert!(!form.is_empty());
        form.clear();
        assert!(form.is_empty());
        assert_eq!(form, BugForm::default());
    }

    #[test]
    fn test_prepare_submission_trims() {
        let form = BugForm::new("  Login fails ", " User cannot log in after reset\n");
        let bug = prepare_submission(&form, "Manual").unwrap();
        assert_eq!(bug.title, "Login fails");
        assert_eq!(bug.description, "User cannot log in after reset");
        assert_eq!(bug.source, "Manual");

        let short = BugForm::new("Bug", "User cannot log in after reset");
        assert!(prepare_submission(&short, "Manual").unwrap_err().is_validation());
    }

    #[test]
    fn test_prepare_update_trims_sent_fields() {
        let update = BugUpdate {
            title: Some("  Checkout crashes on submit  ".to_string()),
            description: None,
            status: Some(crate::types::BugStatus::Resolved),
            assigned_developer: Some(" Alice ".to_string()),
        };
        let prepared = prepare_update(&update).unwrap();
        assert_eq!(prepared.title.as_deref(), Some("Checkout crashes on submit"));
        assert_eq!(prepared.description, None);
        assert_eq!(prepared.assigned_developer.as_deref(), Some("Alice"));

        assert_eq!(
            prepare_update(&BugUpdate::default()),
            Err(ValidationError::NothingToUpdate)
        );
    }

    #[test]
    fn test_delete_prompt() {
        assert_eq!(delete_prompt(3, None), "Delete bug #3?");
        assert_eq!(
            delete_prompt(3, Some("Login fails")),
            "Delete bug #3 \"Login fails\"?"
        );
    }
}
