use clap::{Parser, Subcommand};

use crate::commands::{
    CreateOptions, UpdateOptions, cmd_config_get, cmd_config_set,
    cmd_config_show, cmd_create, cmd_dashboard, cmd_delete, cmd_health, cmd_ls, cmd_predict,
    cmd_shell, cmd_show, cmd_stats, cmd_update,
};
use crate::error::Result;
use crate::filter::FilterState;
use crate::types::{BugId, BugStatus, Severity, VALID_SEVERITIES, VALID_STATUSES};

/// Output options shared by commands that can print JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub json: bool,
}

#[derive(Parser)]
#[command(name = "bugboard")]
#[command(about = "Report bugs and browse them by severity and status")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List bugs, optionally filtered
    #[command(visible_alias = "l")]
    Ls {
        /// Only bugs with this severity (Critical, High, Medium, Low)
        #[arg(long, value_parser = parse_severity)]
        severity: Option<Severity>,

        /// Only bugs with this status (Open, "In Progress", Resolved, Closed)
        #[arg(long, value_parser = parse_status)]
        status: Option<BugStatus>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show bug counts by severity
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show statistics cards and the filtered bug list together
    #[command(visible_alias = "d")]
    Dashboard {
        #[arg(long, value_parser = parse_severity)]
        severity: Option<Severity>,

        #[arg(long, value_parser = parse_status)]
        status: Option<BugStatus>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display a single bug
    #[command(visible_alias = "s")]
    Show {
        /// Bug ID
        id: BugId,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report a new bug
    #[command(visible_alias = "c")]
    Create {
        /// Bug title (at least 5 characters)
        title: String,

        /// Description (at least 10 characters)
        #[arg(short, long)]
        description: String,

        /// Source tag (default: configured source, or "Manual")
        #[arg(long)]
        source: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change fields of an existing bug
    Update {
        /// Bug ID
        id: BugId,

        #[arg(long)]
        title: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(long, value_parser = parse_status)]
        status: Option<BugStatus>,

        /// Assign to a developer
        #[arg(long = "assign")]
        assigned_developer: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a bug (asks for confirmation)
    #[command(visible_alias = "rm")]
    Delete {
        /// Bug ID
        id: BugId,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Ask the classifier for a severity without saving anything
    Predict {
        title: String,

        #[arg(short, long)]
        description: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that the service is reachable
    Health {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive dashboard session
    Shell {
        #[arg(long, value_parser = parse_severity)]
        severity: Option<Severity>,

        #[arg(long, value_parser = parse_status)]
        status: Option<BugStatus>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set a value (environment, base_url, source)
    Set {
        key: String,
        value: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a single value
    Get {
        key: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    pub async fn run(self) -> Result<()> {
        match self {
            Commands::Ls {
                severity,
                status,
                json,
            } => cmd_ls(FilterState::new(severity, status), OutputOptions { json }).await,
            Commands::Stats { json } => cmd_stats(OutputOptions { json }).await,
            Commands::Dashboard {
                severity,
                status,
                json,
            } => cmd_dashboard(FilterState::new(severity, status), OutputOptions { json }).await,
            Commands::Show { id, json } => cmd_show(id, OutputOptions { json }).await,
            Commands::Create {
                title,
                description,
                source,
                json,
            } => {
                cmd_create(
                    CreateOptions {
                        title,
                        description,
                        source,
                    },
                    OutputOptions { json },
                )
                .await
            }
            Commands::Update {
                id,
                title,
                description,
                status,
                assigned_developer,
                json,
            } => {
                cmd_update(
                    UpdateOptions {
                        id,
                        title,
                        description,
                        status,
                        assigned_developer,
                    },
                    OutputOptions { json },
                )
                .await
            }
            Commands::Delete { id, yes } => cmd_delete(id, yes).await,
            Commands::Predict {
                title,
                description,
                json,
            } => cmd_predict(&title, &description, OutputOptions { json }).await,
            Commands::Health { json } => cmd_health(OutputOptions { json }).await,
            Commands::Shell { severity, status } => {
                cmd_shell(FilterState::new(severity, status)).await
            }
            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(OutputOptions { json }),
                ConfigAction::Set { key, value, json } => {
                    cmd_config_set(&key, &value, OutputOptions { json })
                }
                ConfigAction::Get { key, json } => cmd_config_get(&key, OutputOptions { json }),
            },
        }
    }
}

/// Generic validation helper for parsing values with a standard error message format.
fn parse_with_validation<T, F>(
    s: &str,
    parser: F,
    field_name: &str,
    valid_values: &[&str],
) -> std::result::Result<T, String>
where
    F: FnOnce(&str) -> std::result::Result<T, String>,
{
    parser(s).map_err(|_| {
        format!(
            "Invalid {}. Must be one of: {}",
            field_name,
            valid_values.join(", ")
        )
    })
}

fn parse_severity(s: &str) -> std::result::Result<Severity, String> {
    parse_with_validation(
        s,
        |v| v.parse().map_err(|_| String::new()),
        "severity",
        VALID_SEVERITIES,
    )
}

fn parse_status(s: &str) -> std::result::Result<BugStatus, String> {
    parse_with_validation(
        s,
        |v| v.parse().map_err(|_| String::new()),
        "status",
        VALID_STATUSES,
    )
}
