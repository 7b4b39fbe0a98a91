//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::commands::{
    AlertsArgs, AuditArgs, CalendarArgs, ConfigArgs, DealsArgs, DocumentsArgs, PartnersArgs,
    RenewalsArgs, RoundsArgs, StaleArgs, SummaryArgs,
};

/// Dealbook - Partnership deal filtering, grouping and aggregation
#[derive(Parser)]
#[command(name = "dealbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// JSON data feed. Defaults to the bundled sample feed.
    #[arg(short, long, env = "DEALBOOK_DATA", global = true)]
    pub data: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, env = "DEALBOOK_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Reference date for urgency and staleness (YYYY-MM-DD). Defaults to today.
    #[arg(long, global = true)]
    pub today: Option<String>,

    /// Log engine activity to stderr (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List deals with MOIC and ROI
    Deals(DealsArgs),

    /// Summarize deals per partner
    Partners(PartnersArgs),

    /// Aggregate totals over the filtered deals
    Summary(SummaryArgs),

    /// List financing rounds
    Rounds(RoundsArgs),

    /// Search legal documents
    Documents(DocumentsArgs),

    /// Show the document audit trail
    Audit(AuditArgs),

    /// Show pending alerts, or acknowledge one
    Alerts(AlertsArgs),

    /// Show upcoming renewals and notice milestones
    Renewals(RenewalsArgs),

    /// List partners overdue for contact
    Stale(StaleArgs),

    /// Show a month calendar of deadlines
    Calendar(CalendarArgs),

    /// Show or check engine configuration
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
