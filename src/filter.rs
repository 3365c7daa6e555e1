//! Current filter selection for the bug list.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{BugStatus, Severity};

/// Severity and status constraints. `None` means no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BugStatus>,
}

impl FilterState {
    pub fn new(severity: Option<Severity>, status: Option<BugStatus>) -> Self {
        Self { severity, status }
    }

    pub fn is_empty(&self) -> bool {
        self.severity.is_none() && self.status.is_none()
    }

    /// Returns true if the selection changed.
    pub fn set_severity(&mut self, severity: Option<Severity>) -> bool {
        if self.severity == severity {
            return false;
        }
        self.severity = severity;
        true
    }

    /// Returns true if the selection changed.
    pub fn set_status(&mut self, status: Option<BugStatus>) -> bool {
        if self.status == status {
            return false;
        }
        self.status = status;
        true
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.is_empty();
        *self = FilterState::default();
        changed
    }

    /// Query parameters for the list call: exactly the fields that are set.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(severity) = &self.severity {
            pairs.push(("severity", severity.to_string()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.to_string()));
        }
        pairs
    }

    /// Parse a user-supplied severity selection. Empty or "all" clears it.
    pub fn parse_severity(input: &str) -> Result<Option<Severity>> {
        if is_unconstrained(input) {
            return Ok(None);
        }
        input.parse().map(Some)
    }

    /// Parse a user-supplied status selection. Empty or "all" clears it.
    pub fn parse_status(input: &str) -> Result<Option<BugStatus>> {
        if is_unconstrained(input) {
            return Ok(None);
        }
        input.parse().map(Some)
    }
}

fn is_unconstrained(input: &str) -> bool {
    let trimmed = input.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all")
}

impl fmt::Display for FilterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = self
            .severity
            .as_ref()
            .map(|s| s.as_str())
            .unwrap_or("All Severities");
        let status = self
            .status
            .as_ref()
            .map(|s| s.as_str())
            .unwrap_or("All Statuses");
        write!(f, "{severity} / {status}")
    }
}
