//! Access to the bug service REST API.
//!
//! [`BugApi`] is the seam between the synchronizer and the network: the
//! production implementation is [`HttpBugApi`], tests substitute an
//! in-memory double.

pub mod client;
pub mod config;
pub mod error;

use std::future::Future;

use crate::filter::FilterState;
use crate::types::{
    Bug, BugId, BugUpdate, DeleteConfirmation, HealthStatus, NewBug, Prediction, Stats,
};

pub use client::HttpBugApi;
pub use config::{ClientConfig, Environment};
pub use error::ApiError;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// One operation per backend capability. No retries, no caching.
pub trait BugApi: Send + Sync {
    /// List bugs matching the filter, in server order.
    fn list_bugs(&self, filter: &FilterState) -> impl Future<Output = ApiResult<Vec<Bug>>> + Send;

    fn get_bug(&self, id: BugId) -> impl Future<Output = ApiResult<Bug>> + Send;

    /// Create a bug. The returned record may already carry classification fields.
    fn create_bug(&self, bug: &NewBug) -> impl Future<Output = ApiResult<Bug>> + Send;

    fn update_bug(
        &self,
        id: BugId,
        update: &BugUpdate,
    ) -> impl Future<Output = ApiResult<Bug>> + Send;

    fn delete_bug(&self, id: BugId) -> impl Future<Output = ApiResult<DeleteConfirmation>> + Send;

    /// Aggregate statistics across all bugs.
    fn fetch_stats(&self) -> impl Future<Output = ApiResult<Stats>> + Send;

    /// Ask the classifier for a severity without storing anything.
    fn predict(
        &self,
        title: &str,
        description: &str,
    ) -> impl Future<Output = ApiResult<Prediction>> + Send;

    fn health(&self) -> impl Future<Output = ApiResult<HealthStatus>> + Send;
}
