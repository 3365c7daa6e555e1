//! Display-ready projections of bug records and statistics.
//!
//! Everything here is a pure function of its input.

use serde::Serialize;

use crate::types::{Bug, BugId, BugStatus, Severity, Stats};

/// Used for anything without a dedicated colour, including unknown values.
pub const NEUTRAL_COLOR: &str = "#6b7280";

pub const CRITICAL_COLOR: &str = "#7c3aed";
pub const HIGH_COLOR: &str = "#ef4444";
pub const MEDIUM_COLOR: &str = "#f59e0b";
pub const LOW_COLOR: &str = "#10b981";

pub const OPEN_COLOR: &str = "#3b82f6";
pub const IN_PROGRESS_COLOR: &str = "#f59e0b";
pub const RESOLVED_COLOR: &str = "#10b981";
pub const CLOSED_COLOR: &str = "#6b7280";

/// Label shown for a bug the classifier has not reached yet.
pub const UNCLASSIFIED_LABEL: &str = "Unclassified";

pub fn severity_color(severity: Option<&Severity>) -> &'static str {
    match severity {
        Some(Severity::Critical) => CRITICAL_COLOR,
        Some(Severity::High) => HIGH_COLOR,
        Some(Severity::Medium) => MEDIUM_COLOR,
        Some(Severity::Low) => LOW_COLOR,
        Some(Severity::Other(_)) | None => NEUTRAL_COLOR,
    }
}

pub fn status_color(status: Option<&BugStatus>) -> &'static str {
    match status {
        Some(BugStatus::Open) => OPEN_COLOR,
        Some(BugStatus::InProgress) => IN_PROGRESS_COLOR,
        Some(BugStatus::Resolved) => RESOLVED_COLOR,
        Some(BugStatus::Closed) => CLOSED_COLOR,
        Some(BugStatus::Other(_)) | None => NEUTRAL_COLOR,
    }
}

/// Colour for a raw severity string as it might arrive from anywhere.
pub fn severity_color_for(raw: &str) -> &'static str {
    severity_color(Some(&Severity::from(raw.to_string())))
}

/// Whole-number percentage, rounded to nearest. Non-finite scores are omitted.
pub fn format_confidence(score: Option<f64>) -> Option<String> {
    let score = score?;
    if !score.is_finite() {
        return None;
    }
    Some(format!("{}%", (score * 100.0).round() as i64))
}

/// Parse `#rrggbb` into its components.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// One bug ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BugView {
    pub id: BugId,
    pub title: String,
    pub description: String,
    pub severity_label: String,
    pub severity_color: &'static str,
    pub status_label: String,
    pub status_color: &'static str,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_developer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
}

impl From<&Bug> for BugView {
    fn from(bug: &Bug) -> Self {
        BugView {
            id: bug.id,
            title: bug.title.clone(),
            description: bug.description.clone(),
            severity_label: bug
                .severity
                .as_ref()
                .map(|s| s.to_string())
                .unwrap_or_else(|| UNCLASSIFIED_LABEL.to_string()),
            severity_color: severity_color(bug.severity.as_ref()),
            status_label: bug
                .status
                .as_ref()
                .map(|s| s.to_string())
                .unwrap_or_else(|| BugStatus::Open.to_string()),
            status_color: status_color(bug.status.as_ref()),
            source: bug.source.clone(),
            assigned_developer: bug.assigned_developer.clone(),
            confidence: format_confidence(bug.confidence_score),
        }
    }
}

pub fn bug_views(bugs: &[Bug]) -> Vec<BugView> {
    bugs.iter().map(BugView::from).collect()
}

/// A dashboard statistic card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub count: u64,
    pub color: &'static str,
}

/// Total plus one card per known severity. Missing stats show as zero.
pub fn stat_cards(stats: Option<&Stats>) -> Vec<StatCard> {
    let total = StatCard {
        label: "Total Bugs",
        count: stats.map(|s| s.total_bugs).unwrap_or(0),
        color: NEUTRAL_COLOR,
    };

    std::iter::once(total)
        .chain(Severity::KNOWN.iter().map(|severity| StatCard {
            label: match severity {
                Severity::Critical => "Critical",
                Severity::High => "High",
                Severity::Medium => "Medium",
                _ => "Low",
            },
            count: stats.map(|s| s.count_for(severity)).unwrap_or(0),
            color: severity_color(Some(severity)),
        }))
        .collect()
}
