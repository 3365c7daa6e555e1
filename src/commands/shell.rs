//! Interactive dashboard session.
//!
//! Each command is read from stdin, applied to a [`Dashboard`] and the
//! resulting state is rendered again. Fetch failures stay on screen as a
//! banner until the next cycle or `dismiss`; mutation failures must be
//! acknowledged before the session continues.

use owo_colors::OwoColorize;

use super::connect;
use super::render::{format_error_banner, render_state};
use crate::dashboard::Dashboard;
use crate::error::Result;
use crate::filter::FilterState;
use crate::mutation::{BugForm, Confirm, DeleteOutcome, PromptConfirm};
use crate::remote::BugApi;
use crate::types::{BugId, SOURCE_DASHBOARD};
use crate::utils::prompt_line_async;
use crate::view::format_confidence;

const HELP: &str = "\
Commands:
  severity <Critical|High|Medium|Low|all>   filter by severity
  status <Open|In Progress|Resolved|Closed|all>
                                           filter by status
  clear                                    remove both filters
  refresh                                  fetch again
  new                                      report a bug
  delete <id>                              delete a bug
  show <id>                                show a bug from the list
  dismiss                                  hide the error message
  help                                     this text
  quit                                     leave";

/// One parsed shell input line.
#[derive(Debug, PartialEq, Eq)]
enum ShellCommand {
    Severity(String),
    Status(String),
    Clear,
    Refresh,
    New,
    Delete(BugId),
    Show(BugId),
    Dismiss,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

fn parse_command(line: &str) -> ShellCommand {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let id = |rest: &str| rest.trim_start_matches('#').parse::<BugId>().ok();

    match word.to_lowercase().as_str() {
        "" => ShellCommand::Empty,
        "severity" | "sev" => ShellCommand::Severity(rest.to_string()),
        "status" => ShellCommand::Status(rest.to_string()),
        "clear" => ShellCommand::Clear,
        "refresh" | "r" => ShellCommand::Refresh,
        "new" | "create" | "n" => ShellCommand::New,
        "delete" | "rm" => match id(rest) {
            Some(id) => ShellCommand::Delete(id),
            None => ShellCommand::Unknown(line.to_string()),
        },
        "show" => match id(rest) {
            Some(id) => ShellCommand::Show(id),
            None => ShellCommand::Unknown(line.to_string()),
        },
        "dismiss" => ShellCommand::Dismiss,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        _ => ShellCommand::Unknown(line.to_string()),
    }
}

/// Start an interactive session with the given initial filter
pub async fn cmd_shell(filter: FilterState) -> Result<()> {
    let (_, api) = connect()?;
    let dashboard = Dashboard::new(api, PromptConfirm, SOURCE_DASHBOARD).with_filter(filter);
    let mut form = BugForm::default();

    dashboard.activate().await;
    print_dashboard(&dashboard);

    loop {
        let Some(line) = prompt_line_async("\nbugboard> ".to_string()).await? else {
            break;
        };

        match parse_command(&line) {
            ShellCommand::Severity(value) => match FilterState::parse_severity(&value) {
                Ok(severity) => {
                    dashboard.set_severity(severity).await;
                }
                Err(e) => println!("{}", format_error_banner(&e.to_string())),
            },
            ShellCommand::Status(value) => match FilterState::parse_status(&value) {
                Ok(status) => {
                    dashboard.set_status(status).await;
                }
                Err(e) => println!("{}", format_error_banner(&e.to_string())),
            },
            ShellCommand::Clear => {
                dashboard.set_filter(FilterState::default()).await;
            }
            ShellCommand::Refresh => {
                dashboard.refresh().await;
            }
            ShellCommand::New => {
                if !fill_form(&mut form).await? {
                    break;
                }
                match dashboard.create_bug(&mut form).await {
                    Ok(bug) => {
                        let confidence = format_confidence(bug.confidence_score)
                            .map(|c| format!(" ({c} confidence)"))
                            .unwrap_or_default();
                        println!("{} bug #{}{}", "Created".green(), bug.id, confidence);
                    }
                    Err(e) if e.is_validation() => {
                        println!("{}", format_error_banner(&e.to_string()));
                        continue;
                    }
                    Err(_) => {
                        if !acknowledge_error(&dashboard).await? {
                            break;
                        }
                    }
                }
            }
            ShellCommand::Delete(id) => match dashboard.delete_bug(id).await {
                Ok(DeleteOutcome::Deleted(_)) => println!("{} bug #{id}", "Deleted".green()),
                Ok(DeleteOutcome::Declined) => {
                    println!("{}", "Cancelled".dimmed());
                    continue;
                }
                Err(_) => {
                    if !acknowledge_error(&dashboard).await? {
                        break;
                    }
                }
            },
            ShellCommand::Show(id) => {
                match dashboard.bug_views().into_iter().find(|b| b.id == id) {
                    Some(bug) => {
                        println!("{}", super::format_bug_line(&bug));
                        println!("\n{}", bug.description);
                    }
                    None => println!("Bug #{id} is not in the current list"),
                }
                continue;
            }
            ShellCommand::Dismiss => dashboard.dismiss_error(),
            ShellCommand::Help => {
                println!("{HELP}");
                continue;
            }
            ShellCommand::Quit => break,
            ShellCommand::Empty => continue,
            ShellCommand::Unknown(input) => {
                println!("Unknown command '{input}'. Type 'help' for a list.");
                continue;
            }
        }

        print_dashboard(&dashboard);
    }

    Ok(())
}

fn print_dashboard<A: BugApi, C: Confirm>(dashboard: &Dashboard<A, C>) {
    let state = dashboard.state();
    println!("\n{}", dashboard.filter().to_string().bold());
    println!(
        "{}",
        render_state(&state, &dashboard.stat_cards(), &dashboard.bug_views())
    );
}

/// Prompt for title and description. An empty answer keeps the current value.
///
/// Returns false at end of input.
async fn fill_form(form: &mut BugForm) -> Result<bool> {
    let prompt = |label: &str, current: &str| {
        if current.is_empty() {
            format!("{label}: ")
        } else {
            format!("{label} [{current}]: ")
        }
    };

    let Some(title) = prompt_line_async(prompt("Title", &form.title)).await? else {
        return Ok(false);
    };
    if !title.trim().is_empty() {
        form.title = title;
    }

    let Some(description) = prompt_line_async(prompt("Description", &form.description)).await?
    else {
        return Ok(false);
    };
    if !description.trim().is_empty() {
        form.description = description;
    }

    Ok(true)
}

/// Show the stored mutation error and wait for Enter, then clear it.
///
/// Returns false at end of input.
async fn acknowledge_error<A: BugApi, C: Confirm>(dashboard: &Dashboard<A, C>) -> Result<bool> {
    if let Some(message) = dashboard.state().error {
        println!("{}", format_error_banner(&message));
    }
    let answered = prompt_line_async("Press Enter to continue".to_string())
        .await?
        .is_some();
    dashboard.dismiss_error();
    Ok(answered)
}
