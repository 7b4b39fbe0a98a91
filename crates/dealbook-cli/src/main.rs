//! Dealbook CLI - Filter, group and aggregate partnership deals.
//!
//! # Usage
//!
//! ```bash
//! # List Aviva's deals with MOIC and ROI
//! dealbook deals --partner Aviva
//!
//! # Per-partner totals as JSON
//! dealbook partners --format json
//!
//! # Alert queue as of a fixed date, then acknowledge one
//! dealbook alerts --today 2025-01-15
//! dealbook alerts --ack AL-001 --data feed.json --save
//!
//! # Month grid of deadlines
//! dealbook calendar --month 2025-02
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so table, JSON and CSV output stay clean
    let default_level = match cli.verbose {
        0 => "warn,dealbook=info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into()),
        ))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let ctx = Context::load(
        cli.data.as_deref(),
        cli.config.as_deref(),
        cli.today.as_deref(),
        cli.format,
    )?;

    match cli.command {
        Commands::Deals(args) => commands::deals::execute(args, &ctx)?,
        Commands::Partners(args) => commands::partners::execute(args, &ctx)?,
        Commands::Summary(args) => commands::summary::execute(args, &ctx)?,
        Commands::Rounds(args) => commands::rounds::execute(args, &ctx)?,
        Commands::Documents(args) => commands::documents::execute(args, &ctx)?,
        Commands::Audit(args) => commands::audit::execute(args, &ctx)?,
        Commands::Alerts(args) => commands::alerts::execute(args, &ctx)?,
        Commands::Renewals(args) => commands::renewals::execute(args, &ctx)?,
        Commands::Stale(args) => commands::stale::execute(args, &ctx)?,
        Commands::Calendar(args) => commands::calendar::execute(args, &ctx)?,
        Commands::Config(args) => commands::config::execute(args, &ctx)?,
    }

    Ok(())
}
