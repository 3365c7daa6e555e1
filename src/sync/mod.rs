//! Filter-keyed synchronization of the bug list and statistics.
//!
//! A cycle marks the state as loading, fetches the list and the statistics
//! concurrently, and applies both results together once both calls have
//! resolved. Cycles are numbered at dispatch; a cycle that completes after
//! a newer one was dispatched is dropped without touching the state, so
//! stale responses never overwrite fresher ones.

pub mod state;

use std::sync::Arc;

use tokio::sync::watch;

use crate::filter::FilterState;
use crate::remote::{ApiResult, BugApi};
use crate::types::{Bug, Stats};

pub use state::{SyncPhase, ViewState};

/// How a synchronization cycle ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Both calls succeeded and the results replaced the stored data.
    Applied,
    /// At least one call failed; the message was stored as the error.
    Failed(String),
    /// A newer cycle was dispatched first; nothing was applied.
    Superseded,
}

impl CycleOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, CycleOutcome::Applied)
    }
}

pub struct Synchronizer<A> {
    api: Arc<A>,
    state: watch::Sender<ViewState>,
    /// Current selection. Only changed together with the cycle number.
    last_filter: parking_lot::Mutex<FilterState>,
}

impl<A: BugApi> Synchronizer<A> {
    pub fn new(api: Arc<A>) -> Self {
        let (state, _) = watch::channel(ViewState::default());
        Self {
            api,
            state,
            last_filter: parking_lot::Mutex::new(FilterState::default()),
        }
    }

    pub fn api(&self) -> &Arc<A> {
        &self.api
    }

    /// Current snapshot.
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    /// Current selection.
    pub fn filter(&self) -> FilterState {
        self.last_filter.lock().clone()
    }

    /// Set the selection without fetching. The next [`Self::resync`] uses it.
    pub fn set_initial_filter(&self, filter: FilterState) {
        *self.last_filter.lock() = filter;
    }

    /// Run one cycle for `filter`.
    pub async fn sync(&self, filter: &FilterState) -> CycleOutcome {
        self.update_filter(|current| {
            *current = filter.clone();
            true
        })
        .await
        .unwrap_or(CycleOutcome::Superseded)
    }

    /// Re-run a cycle with the current selection.
    pub async fn resync(&self) -> CycleOutcome {
        self.update_filter(|_| true)
            .await
            .unwrap_or(CycleOutcome::Superseded)
    }

    /// Apply `change` to the selection and, if it reports a change, run a
    /// cycle for the result. Returns `None` when nothing changed.
    pub async fn update_filter<F>(&self, change: F) -> Option<CycleOutcome>
    where
        F: FnOnce(&mut FilterState) -> bool,
    {
        let (cycle, filter) = self.begin_cycle(change)?;
        tracing::debug!(cycle, %filter, "sync cycle started");

        let (bugs, stats) = tokio::join!(self.api.list_bugs(&filter), self.api.fetch_stats());

        Some(self.complete_cycle(cycle, bugs, stats))
    }

    fn begin_cycle<F>(&self, change: F) -> Option<(u64, FilterState)>
    where
        F: FnOnce(&mut FilterState) -> bool,
    {
        let mut dispatched = None;
        self.state.send_if_modified(|current| {
            // Selection and cycle number change under the channel lock so
            // the newest cycle always fetches the newest selection.
            let mut selection = self.last_filter.lock();
            if !change(&mut selection) {
                return false;
            }
            let mut next = current.clone();
            next.cycle += 1;
            next.phase = SyncPhase::Loading;
            next.loading = true;
            next.error = None;
            dispatched = Some((next.cycle, selection.clone()));
            *current = next;
            true
        });
        dispatched
    }

    fn complete_cycle(
        &self,
        cycle: u64,
        bugs: ApiResult<Vec<Bug>>,
        stats: ApiResult<Stats>,
    ) -> CycleOutcome {
        let mut outcome = CycleOutcome::Superseded;

        self.state.send_if_modified(|current| {
            if current.cycle != cycle {
                return false;
            }

            let mut next = current.clone();
            next.loading = false;
            match (bugs, stats) {
                (Ok(bugs), Ok(stats)) => {
                    next.bugs = Arc::new(bugs);
                    next.stats = Some(stats);
                    next.phase = SyncPhase::Ready;
                    outcome = CycleOutcome::Applied;
                }
                (Err(err), _) | (_, Err(err)) => {
                    let message = err.user_message();
                    next.error = Some(message.clone());
                    next.phase = SyncPhase::Error;
                    outcome = CycleOutcome::Failed(message);
                }
            }
            *current = next;
            true
        });

        match &outcome {
            CycleOutcome::Applied => {
                let state = self.state.borrow();
                tracing::info!(cycle, bugs = state.bugs.len(), "sync cycle applied");
            }
            CycleOutcome::Failed(message) => {
                tracing::warn!(cycle, "sync cycle failed: {message}");
            }
            CycleOutcome::Superseded => {
                tracing::debug!(cycle, "sync cycle superseded by a newer one");
            }
        }

        outcome
    }

    /// Claim the creating flag. Returns false if a create is already in flight.
    pub(crate) fn begin_create(&self) -> bool {
        self.state.send_if_modified(|current| {
            if current.creating {
                return false;
            }
            let mut next = current.clone();
            next.creating = true;
            *current = next;
            true
        })
    }

    pub(crate) fn finish_create(&self) {
        self.state.send_if_modified(|current| {
            if !current.creating {
                return false;
            }
            let mut next = current.clone();
            next.creating = false;
            *current = next;
            true
        });
    }

    /// Store a mutation failure so the presentation layer can show it.
    pub(crate) fn report_error(&self, message: String) {
        self.state.send_modify(|current| {
            let mut next = current.clone();
            next.error = Some(message);
            *current = next;
        });
    }

    /// Dismiss the current error message.
    pub fn dismiss_error(&self) {
        self.state.send_if_modified(|current| {
            if current.error.is_none() {
                return false;
            }
            let mut next = current.clone();
            next.error = None;
            *current = next;
            true
        });
    }
}
