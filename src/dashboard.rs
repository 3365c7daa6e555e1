//! The dashboard ties filter selection, synchronization and mutations together.
//!
//! Every filter change starts a new synchronizer cycle. Mutations trigger
//! their own cycles through the same synchronizer. None of these block each
//! other; overlapping cycles are resolved by the synchronizer's sequencing.

use std::sync::Arc;

use tokio::sync::watch;

use crate::error::Result;
use crate::filter::FilterState;
use crate::mutation::{BugForm, Confirm, DeleteOutcome, Mutations};
use crate::remote::BugApi;
use crate::sync::{CycleOutcome, Synchronizer, ViewState};
use crate::types::{Bug, BugId, BugStatus, BugUpdate, Severity};
use crate::view::{BugView, StatCard, bug_views, stat_cards};

/// The current filter lives in the synchronizer, so the selection and the
/// cycle that fetches it are always updated together.
pub struct Dashboard<A, C> {
    sync: Arc<Synchronizer<A>>,
    mutations: Mutations<A, C>,
}

impl<A: BugApi, C: Confirm> Dashboard<A, C> {
    pub fn new(api: Arc<A>, confirm: C, source: impl Into<String>) -> Self {
        let sync = Arc::new(Synchronizer::new(api));
        let mutations = Mutations::new(Arc::clone(&sync), confirm, source);
        Self { sync, mutations }
    }

    /// Start with a filter already selected. Nothing is fetched until [`Self::activate`].
    pub fn with_filter(self, filter: FilterState) -> Self {
        self.sync.set_initial_filter(filter);
        self
    }

    pub fn filter(&self) -> FilterState {
        self.sync.filter()
    }

    pub fn state(&self) -> ViewState {
        self.sync.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.sync.subscribe()
    }

    pub fn synchronizer(&self) -> &Synchronizer<A> {
        &self.sync
    }

    pub fn mutations(&self) -> &Mutations<A, C> {
        &self.mutations
    }

    /// Initial load.
    pub async fn activate(&self) -> CycleOutcome {
        self.sync.resync().await
    }

    /// Explicit user refresh with the current filter.
    pub async fn refresh(&self) -> CycleOutcome {
        self.activate().await
    }

    /// Change the severity filter. Returns `None` if the selection did not change.
    pub async fn set_severity(&self, severity: Option<Severity>) -> Option<CycleOutcome> {
        self.sync
            .update_filter(|current| current.set_severity(severity))
            .await
    }

    /// Change the status filter. Returns `None` if the selection did not change.
    pub async fn set_status(&self, status: Option<BugStatus>) -> Option<CycleOutcome> {
        self.sync
            .update_filter(|current| current.set_status(status))
            .await
    }

    /// Replace the whole selection. Returns `None` if it did not change.
    pub async fn set_filter(&self, filter: FilterState) -> Option<CycleOutcome> {
        self.sync
            .update_filter(|current| {
                if *current == filter {
                    return false;
                }
                *current = filter;
                true
            })
            .await
    }

    pub async fn create_bug(&self, form: &mut BugForm) -> Result<Bug> {
        self.mutations.create(form).await
    }

    pub async fn delete_bug(&self, id: BugId) -> Result<DeleteOutcome> {
        self.mutations.delete(id).await
    }

    pub async fn update_bug(&self, id: BugId, update: &BugUpdate) -> Result<Bug> {
        self.mutations.update(id, update).await
    }

    pub fn dismiss_error(&self) {
        self.sync.dismiss_error();
    }

    /// Display rows for the current collection.
    pub fn bug_views(&self) -> Vec<BugView> {
        bug_views(&self.state().bugs)
    }

    pub fn stat_cards(&self) -> Vec<StatCard> {
        stat_cards(self.state().stats.as_ref())
    }
}
