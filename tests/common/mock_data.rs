//! Builders for bug records and statistics used across tests.

use bugboard::types::{Bug, BugId, BugStatus, Severity, Stats};

/// Builder for creating test bugs
pub struct BugBuilder {
    bug: Bug,
}

impl BugBuilder {
    pub fn new(id: BugId) -> Self {
        Self {
            bug: Bug {
                id,
                title: format!("Bug number {id}"),
                description: "Steps to reproduce are in the attached log".to_string(),
                severity: None,
                status: Some(BugStatus::Open),
                source: "Manual".to_string(),
                assigned_developer: None,
                confidence_score: None,
                predicted_severity: None,
                created_at: Some("2024-01-01T00:00:00Z".to_string()),
                updated_at: None,
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.bug.title = title.to_string();
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.bug.severity = Some(severity);
        self
    }

    pub fn status(mut self, status: BugStatus) -> Self {
        self.bug.status = Some(status);
        self
    }

    pub fn confidence(mut self, score: f64) -> Self {
        self.bug.confidence_score = Some(score);
        self
    }

    pub fn build(self) -> Bug {
        self.bug
    }
}

/// Statistics computed the way the service computes them.
pub fn stats_for(bugs: &[Bug]) -> Stats {
    let mut stats = Stats {
        total_bugs: bugs.len() as u64,
        ..Default::default()
    };
    for bug in bugs {
        if let Some(severity) = &bug.severity {
            *stats.by_severity.entry(severity.clone()).or_insert(0) += 1;
        }
    }
    stats
}
