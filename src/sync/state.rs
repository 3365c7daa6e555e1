//! View state published by the synchronizer.

use std::sync::Arc;

use crate::types::{Bug, Stats};

/// Lifecycle of the synchronization loop. There is no terminal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
}

/// Snapshot of everything the presentation layer reads.
///
/// Snapshots are only ever replaced as a whole, so a cloned value stays
/// internally consistent. The bug collection is shared behind an `Arc` to
/// keep cloning cheap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub phase: SyncPhase,
    pub loading: bool,
    pub error: Option<String>,
    /// A create request is in flight.
    pub creating: bool,
    pub bugs: Arc<Vec<Bug>>,
    pub stats: Option<Stats>,
    /// Sequence number of the most recently dispatched cycle.
    pub cycle: u64,
}

impl ViewState {
    /// True only while the very first load is running with nothing to show.
    ///
    /// An empty list with statistics already loaded is not blank.
    pub fn is_blank_loading(&self) -> bool {
        self.loading && !self.has_data()
    }

    pub fn has_data(&self) -> bool {
        self.stats.is_some() || !self.bugs.is_empty()
    }

    pub fn find_bug(&self, id: crate::types::BugId) -> Option<&Bug> {
        self.bugs.iter().find(|b| b.id == id)
    }
}
