pub mod cli;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod mutation;
pub mod remote;
pub mod sync;
pub mod types;
pub mod utils;
pub mod view;

pub use config::Config;
pub use dashboard::Dashboard;
pub use error::{BugboardError, Result};
pub use filter::FilterState;
pub use mutation::{
    AlwaysConfirm, BugForm, Confirm, DeleteOutcome, Mutations, NeverConfirm, PromptConfirm,
};
pub use remote::{ApiError, ApiResult, BugApi, ClientConfig, Environment, HttpBugApi};
pub use sync::{CycleOutcome, SyncPhase, Synchronizer, ViewState};
pub use types::{
    Bug, BugId, BugStatus, BugUpdate, DeleteConfirmation, HealthStatus, NewBug, Prediction,
    Severity, Stats, VALID_SEVERITIES, VALID_STATUSES,
};
pub use view::{BugView, StatCard};
