//! CLI command implementations.

pub mod alerts;
pub mod audit;
pub mod calendar;
pub mod config;
pub mod deals;
pub mod documents;
pub mod partners;
pub mod renewals;
pub mod rounds;
pub mod stale;
pub mod summary;

// Re-export argument types for convenience
pub use alerts::AlertsArgs;
pub use audit::AuditArgs;
pub use calendar::CalendarArgs;
pub use config::ConfigArgs;
pub use deals::DealsArgs;
pub use documents::DocumentsArgs;
pub use partners::PartnersArgs;
pub use renewals::RenewalsArgs;
pub use rounds::RoundsArgs;
pub use stale::StaleArgs;
pub use summary::SummaryArgs;

use clap::Args;
use dealbook_core::calendar::CalendarMonth;
use dealbook_core::types::Date;
use dealbook_engine::filter::FilterCriteria;
use dealbook_engine::{DealBook, EngineConfig};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

const SAMPLE_FEED: &str = include_str!("../../data/sample_feed.json");

/// Everything a command needs: the loaded book, configuration, reference
/// date and output format.
pub struct Context {
    pub book: DealBook,
    pub data_path: Option<PathBuf>,
    pub config: EngineConfig,
    pub today: Date,
    pub format: OutputFormat,
}

impl Context {
    /// Loads the data feed and configuration named on the command line.
    pub fn load(
        data: Option<&Path>,
        config: Option<&Path>,
        today: Option<&str>,
        format: OutputFormat,
    ) -> CliResult<Self> {
        let book = match data {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|source| CliError::DataFile {
                    path: path.display().to_string(),
                    source,
                })?;
                info!(path = %path.display(), "loading data feed");
                DealBook::from_json(&json)?
            }
            None => {
                debug!("using bundled sample feed");
                DealBook::from_json(SAMPLE_FEED)?
            }
        };

        let config = match config {
            Some(path) => EngineConfig::from_file(path)?,
            None => EngineConfig::default(),
        };

        let today = match today {
            Some(s) => parse_date(s)?,
            None => Date::today(),
        };

        Ok(Self {
            book,
            data_path: data.map(Path::to_path_buf),
            config,
            today,
            format,
        })
    }

    /// Returns true for table output, where headers and notes are printed.
    pub fn is_table(&self) -> bool {
        self.format == OutputFormat::Table
    }
}

/// Filter options shared by the listing commands.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Exact partner name
    #[arg(short, long)]
    pub partner: Option<String>,

    /// Exact status label (e.g. "On Track")
    #[arg(short, long)]
    pub status: Option<String>,

    /// Exact kind or type label (e.g. "Studio", "Series A", "NDA")
    #[arg(short, long)]
    pub kind: Option<String>,

    /// Case-insensitive text search
    #[arg(short = 'q', long)]
    pub search: Option<String>,

    /// Earliest key date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Latest key date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Only completed, exited or graduated records
    #[arg(long, conflicts_with = "active")]
    pub concluded: bool,

    /// Only records still in progress
    #[arg(long)]
    pub active: bool,
}

impl FilterArgs {
    /// Builds engine criteria from the flags.
    ///
    /// A range with only one bound is open on the other side.
    pub fn criteria(&self) -> CliResult<FilterCriteria> {
        let mut criteria = FilterCriteria {
            partner: self.partner.clone(),
            status: self.status.clone(),
            kind: self.kind.clone(),
            search: self.search.clone(),
            ..FilterCriteria::default()
        };

        let from = self.from.as_deref().map(parse_date).transpose()?;
        let to = self.to.as_deref().map(parse_date).transpose()?;
        if from.is_some() || to.is_some() {
            let start = from.unwrap_or(Date::MIN);
            let end = to.unwrap_or(Date::MAX);
            criteria = criteria.with_date_range(start, end);
        }

        if self.concluded {
            criteria = criteria.with_concluded(true);
        } else if self.active {
            criteria = criteria.with_concluded(false);
        }
        Ok(criteria)
    }
}

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Parses a month string in YYYY-MM format.
pub fn parse_month(s: &str) -> CliResult<CalendarMonth> {
    s.parse().map_err(|_| CliError::InvalidMonth(s.to_string()))
}

/// Describes where the data feed came from.
pub fn display_path(path: Option<&PathBuf>) -> String {
    path.map_or_else(|| "<bundled sample>".to_string(), |p| p.display().to_string())
}
