//! Terminal rendering of the dashboard.
//!
//! Colours are the hex values from [`crate::view`], emitted as truecolor
//! escapes only when stdout supports colour.

use owo_colors::{OwoColorize, Stream};

use crate::sync::ViewState;
use crate::view::{BugView, StatCard, hex_to_rgb};

pub const EMPTY_LIST_MESSAGE: &str = "No bugs found. Create your first bug report!";
pub const LOADING_MESSAGE: &str = "Loading...";

/// Paint `text` in the given `#rrggbb` colour.
pub fn paint(text: &str, hex: &str) -> String {
    match hex_to_rgb(hex) {
        Some((r, g, b)) => text
            .if_supports_color(Stream::Stdout, |t| t.truecolor(r, g, b))
            .to_string(),
        None => text.to_string(),
    }
}

/// `#12   [Critical] [Open]  Title`
pub fn format_bug_line(bug: &BugView) -> String {
    let id = format!("#{:<4}", bug.id);
    let severity = paint(&format!("[{}]", bug.severity_label), bug.severity_color);
    let status = paint(&format!("[{}]", bug.status_label), bug.status_color);

    format!(
        "{} {} {} {}",
        id.if_supports_color(Stream::Stdout, |t| t.cyan()),
        severity,
        status,
        bug.title
    )
}

/// Secondary line under a bug: source, assignee and confidence when present.
pub fn format_bug_meta(bug: &BugView) -> String {
    let mut parts = vec![format!("source: {}", bug.source)];
    if let Some(dev) = &bug.assigned_developer {
        parts.push(format!("assigned: {dev}"));
    }
    if let Some(confidence) = &bug.confidence {
        parts.push(format!("confidence: {confidence}"));
    }
    let meta = parts.join("  ");
    format!("      {}", meta.if_supports_color(Stream::Stdout, |t| t.dimmed()))
}

pub fn format_stat_cards(cards: &[StatCard]) -> String {
    cards
        .iter()
        .map(|card| {
            format!(
                "{} {}",
                paint(&card.count.to_string(), card.color)
                    .if_supports_color(Stream::Stdout, |t| t.bold())
                    .to_string(),
                card.label
            )
        })
        .collect::<Vec<_>>()
        .join("   ")
}

pub fn format_error_banner(message: &str) -> String {
    format!(
        "{} {}",
        "Error:".if_supports_color(Stream::Stdout, |t| t.red()),
        message
    )
}

/// Full dashboard screen for one state snapshot.
///
/// While loading with nothing to show only the loading line is rendered;
/// once data exists it stays visible during later cycles.
pub fn render_state(state: &ViewState, cards: &[StatCard], bugs: &[BugView]) -> String {
    let mut out = String::new();

    if let Some(error) = &state.error {
        out.push_str(&format_error_banner(error));
        out.push_str("\n\n");
    }

    if state.is_blank_loading() {
        out.push_str(LOADING_MESSAGE);
        return out;
    }

    out.push_str(&format_stat_cards(cards));
    out.push_str("\n\n");

    if bugs.is_empty() {
        if state.loading {
            out.push_str(LOADING_MESSAGE);
        } else {
            out.push_str(EMPTY_LIST_MESSAGE);
        }
        return out;
    }

    let lines: Vec<String> = bugs
        .iter()
        .map(|bug| format!("{}\n{}", format_bug_line(bug), format_bug_meta(bug)))
        .collect();
    out.push_str(&lines.join("\n"));

    if state.loading {
        out.push_str("\n\n");
        out.push_str(LOADING_MESSAGE);
    }
    out
}
