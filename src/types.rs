use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::BugboardError;

pub const CONFIG_DIR: &str = ".bugboard";

/// Server-assigned bug identifier.
pub type BugId = u64;

/// Source tag for bugs entered through the CLI.
pub const SOURCE_MANUAL: &str = "Manual";

/// Source tag for bugs entered through the dashboard shell.
pub const SOURCE_DASHBOARD: &str = "Dashboard";

/// Bug severity as assigned by the classification service.
///
/// Values outside the four known levels are kept verbatim in `Other` so a
/// newer server never breaks decoding.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Other(String),
}

impl Severity {
    pub const KNOWN: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
            Severity::Other(s) => s,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Severity::Other(_))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Strict parse: only the four known levels are accepted (case-insensitive).
impl FromStr for Severity {
    type Err = BugboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "critical" => Ok(Severity::Critical),
            "high" => Ok(Severity::High),
            "medium" => Ok(Severity::Medium),
            "low" => Ok(Severity::Low),
            _ => Err(BugboardError::InvalidSeverity(s.to_string())),
        }
    }
}

impl From<String> for Severity {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(Severity::Other(s))
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

pub const VALID_SEVERITIES: &[&str] = &["Critical", "High", "Medium", "Low"];

/// Workflow status of a bug.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BugStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
    Other(String),
}

impl BugStatus {
    pub const KNOWN: [BugStatus; 4] = [
        BugStatus::Open,
        BugStatus::InProgress,
        BugStatus::Resolved,
        BugStatus::Closed,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            BugStatus::Open => "Open",
            BugStatus::InProgress => "In Progress",
            BugStatus::Resolved => "Resolved",
            BugStatus::Closed => "Closed",
            BugStatus::Other(s) => s,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, BugStatus::Other(_))
    }
}

impl fmt::Display for BugStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Strict parse. "in progress", "in-progress" and "in_progress" all map to
/// `InProgress`.
impl FromStr for BugStatus {
    type Err = BugboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "open" => Ok(BugStatus::Open),
            "in progress" => Ok(BugStatus::InProgress),
            "resolved" => Ok(BugStatus::Resolved),
            "closed" => Ok(BugStatus::Closed),
            _ => Err(BugboardError::InvalidStatus(s.to_string())),
        }
    }
}

impl From<String> for BugStatus {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(BugStatus::Other(s))
    }
}

impl From<BugStatus> for String {
    fn from(status: BugStatus) -> Self {
        match status {
            BugStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

pub const VALID_STATUSES: &[&str] = &["Open", "In Progress", "Resolved", "Closed"];

/// A bug record as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bug {
    pub id: BugId,

    pub title: String,

    pub description: String,

    /// Absent until classification completes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BugStatus>,

    #[serde(default)]
    pub source: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_developer: Option<String>,

    /// Classifier confidence in [0, 1].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_severity: Option<Severity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Request body for creating a bug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBug {
    pub title: String,
    pub description: String,
    pub source: String,
}

/// Partial update; only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BugStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_developer: Option<String>,
}

impl BugUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.assigned_developer.is_none()
    }
}

/// Aggregate counts across all bugs, regardless of the active filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total_bugs: u64,

    #[serde(default)]
    pub by_severity: BTreeMap<Severity, u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by_status: Option<BTreeMap<BugStatus, u64>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_bugs: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_bugs: Option<u64>,
}

impl Stats {
    /// Count for one severity, 0 when the server omitted it.
    pub fn count_for(&self, severity: &Severity) -> u64 {
        self.by_severity.get(severity).copied().unwrap_or(0)
    }

    pub fn classified_total(&self) -> u64 {
        self.by_severity.values().sum()
    }

    /// Bugs counted in the total but not yet in any severity bucket.
    pub fn pending_classification(&self) -> u64 {
        self.total_bugs.saturating_sub(self.classified_total())
    }
}

/// Result of the severity prediction endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub severity: Severity,
    pub confidence: f64,
    #[serde(default)]
    pub suggested_developer: Option<String>,
    #[serde(default)]
    pub reasoning: Option<String>,
}

/// Body of a successful delete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}
