//! In-memory [`BugApi`] double.
//!
//! Behaves like the service over a vector of bugs, records every call and
//! lets tests inject failures and per-filter latency.

use std::collections::HashMap;
use std::time::Duration;

use parking_lot::Mutex;

use bugboard::filter::FilterState;
use bugboard::remote::{ApiError, ApiResult, BugApi};
use bugboard::types::{
    Bug, BugId, BugUpdate, DeleteConfirmation, HealthStatus, NewBug, Prediction, Severity, Stats,
};

use super::mock_data::stats_for;

#[derive(Default)]
struct MockState {
    bugs: Vec<Bug>,
    next_id: BugId,
    classify_as: Option<(Severity, f64)>,

    list_calls: Vec<FilterState>,
    stats_calls: usize,
    create_calls: Vec<NewBug>,
    update_calls: Vec<(BugId, BugUpdate)>,
    delete_calls: Vec<BugId>,

    fail_list: Option<ApiError>,
    fail_stats: Option<ApiError>,
    fail_create: Option<ApiError>,
    fail_update: Option<ApiError>,
    fail_delete: Option<ApiError>,

    list_delays: HashMap<FilterState, Duration>,
    stats_delay: Option<Duration>,
    create_delay: Option<Duration>,
}

pub struct MockApi {
    state: Mutex<MockState>,
}

impl MockApi {
    pub fn new(bugs: Vec<Bug>) -> Self {
        let next_id = bugs.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        Self {
            state: Mutex::new(MockState {
                bugs,
                next_id,
                ..Default::default()
            }),
        }
    }

    /// Every created bug comes back classified with this severity and score.
    pub fn classify_as(&self, severity: Severity, confidence: f64) {
        self.state.lock().classify_as = Some((severity, confidence));
    }

    pub fn fail_list(&self, err: Option<ApiError>) {
        self.state.lock().fail_list = err;
    }

    pub fn fail_stats(&self, err: Option<ApiError>) {
        self.state.lock().fail_stats = err;
    }

    pub fn fail_create(&self, err: Option<ApiError>) {
        self.state.lock().fail_create = err;
    }

    pub fn fail_update(&self, err: Option<ApiError>) {
        self.state.lock().fail_update = err;
    }

    pub fn fail_delete(&self, err: Option<ApiError>) {
        self.state.lock().fail_delete = err;
    }

    pub fn delay_list(&self, filter: FilterState, delay: Duration) {
        self.state.lock().list_delays.insert(filter, delay);
    }

    pub fn delay_stats(&self, delay: Duration) {
        self.state.lock().stats_delay = Some(delay);
    }

    pub fn delay_create(&self, delay: Duration) {
        self.state.lock().create_delay = Some(delay);
    }

    pub fn list_calls(&self) -> Vec<FilterState> {
        self.state.lock().list_calls.clone()
    }

    pub fn stats_calls(&self) -> usize {
        self.state.lock().stats_calls
    }

    pub fn create_calls(&self) -> Vec<NewBug> {
        self.state.lock().create_calls.clone()
    }

    pub fn update_calls(&self) -> Vec<(BugId, BugUpdate)> {
        self.state.lock().update_calls.clone()
    }

    pub fn delete_calls(&self) -> Vec<BugId> {
        self.state.lock().delete_calls.clone()
    }

    pub fn bugs(&self) -> Vec<Bug> {
        self.state.lock().bugs.clone()
    }
}

fn matches(filter: &FilterState, bug: &Bug) -> bool {
    let severity_ok = match &filter.severity {
        Some(s) => bug.severity.as_ref() == Some(s),
        None => true,
    };
    let status_ok = match &filter.status {
        Some(s) => bug.status.as_ref() == Some(s),
        None => true,
    };
    severity_ok && status_ok
}

async fn pause(delay: Option<Duration>) {
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
}

fn not_found() -> ApiError {
    ApiError::server(404, Some("Bug not found".to_string()))
}

impl BugApi for MockApi {
    async fn list_bugs(&self, filter: &FilterState) -> ApiResult<Vec<Bug>> {
        let delay = {
            let mut state = self.state.lock();
            state.list_calls.push(filter.clone());
            state.list_delays.get(filter).copied()
        };
        pause(delay).await;

        let state = self.state.lock();
        if let Some(err) = &state.fail_list {
            return Err(err.clone());
        }
        Ok(state
            .bugs
            .iter()
            .filter(|b| matches(filter, b))
            .cloned()
            .collect())
    }

    async fn get_bug(&self, id: BugId) -> ApiResult<Bug> {
        let state = self.state.lock();
        state
            .bugs
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn create_bug(&self, bug: &NewBug) -> ApiResult<Bug> {
        let delay = {
            let mut state = self.state.lock();
            state.create_calls.push(bug.clone());
            state.create_delay
        };
        pause(delay).await;

        let mut state = self.state.lock();
        if let Some(err) = &state.fail_create {
            return Err(err.clone());
        }
        let id = state.next_id;
        state.next_id += 1;
        let classification = state.classify_as.clone();
        let created = Bug {
            id,
            title: bug.title.clone(),
            description: bug.description.clone(),
            severity: classification.as_ref().map(|(s, _)| s.clone()),
            status: Some(bugboard::types::BugStatus::Open),
            source: bug.source.clone(),
            assigned_developer: None,
            confidence_score: classification.as_ref().map(|(_, c)| *c),
            predicted_severity: classification.map(|(s, _)| s),
            created_at: None,
            updated_at: None,
        };
        state.bugs.push(created.clone());
        Ok(created)
    }

    async fn update_bug(&self, id: BugId, update: &BugUpdate) -> ApiResult<Bug> {
        let mut state = self.state.lock();
        state.update_calls.push((id, update.clone()));
        if let Some(err) = &state.fail_update {
            return Err(err.clone());
        }
        let bug = state
            .bugs
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(not_found)?;
        if let Some(title) = &update.title {
            bug.title = title.clone();
        }
        if let Some(description) = &update.description {
            bug.description = description.clone();
        }
        if let Some(status) = &update.status {
            bug.status = Some(status.clone());
        }
        if let Some(dev) = &update.assigned_developer {
            bug.assigned_developer = Some(dev.clone());
        }
        Ok(bug.clone())
    }

    async fn delete_bug(&self, id: BugId) -> ApiResult<DeleteConfirmation> {
        let mut state = self.state.lock();
        state.delete_calls.push(id);
        if let Some(err) = &state.fail_delete {
            return Err(err.clone());
        }
        let before = state.bugs.len();
        state.bugs.retain(|b| b.id != id);
        if state.bugs.len() == before {
            return Err(not_found());
        }
        Ok(DeleteConfirmation {
            message: format!("Bug {id} deleted successfully"),
        })
    }

    async fn fetch_stats(&self) -> ApiResult<Stats> {
        let delay = {
            let mut state = self.state.lock();
            state.stats_calls += 1;
            state.stats_delay
        };
        pause(delay).await;

        let state = self.state.lock();
        if let Some(err) = &state.fail_stats {
            return Err(err.clone());
        }
        Ok(stats_for(&state.bugs))
    }

    async fn predict(&self, _title: &str, _description: &str) -> ApiResult<Prediction> {
        let state = self.state.lock();
        let (severity, confidence) = state
            .classify_as
            .clone()
            .unwrap_or((Severity::Medium, 0.5));
        Ok(Prediction {
            severity,
            confidence,
            suggested_developer: None,
            reasoning: None,
        })
    }

    async fn health(&self) -> ApiResult<HealthStatus> {
        Ok(HealthStatus {
            status: "healthy".to_string(),
            timestamp: None,
        })
    }
}
