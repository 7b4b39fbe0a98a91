//! Config command implementation.
//!
//! Shows the effective engine configuration or checks a configuration file.

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

use dealbook_engine::EngineConfig;

use crate::cli::OutputFormat;
use crate::commands::{display_path, Context};
use crate::output::{print_header, print_info, print_json, print_output, print_success, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Print the default configuration as TOML
    Default,

    /// Validate a configuration file
    Check(CheckArgs),
}

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the TOML file
    pub path: PathBuf,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show(&ctx.config, ctx),
        ConfigCommand::Default => print_config(&EngineConfig::default(), ctx.format),
        ConfigCommand::Check(check) => {
            let config = EngineConfig::from_file(&check.path)?;
            if ctx.format == OutputFormat::Json {
                return print_json(&config);
            }
            print_success(&format!("{} is valid", check.path.display()));
            Ok(())
        }
    }
}

fn show(config: &EngineConfig, ctx: &Context) -> Result<()> {
    if !ctx.is_table() {
        return print_config(config, ctx.format);
    }

    print_header("Engine Configuration");
    print_info(&format!("Data feed: {}", display_path(ctx.data_path.as_ref())));
    print_info(&format!("Reference date: {}", ctx.today));

    let notice = config
        .notice_periods_days
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let rows = vec![
        KeyValue::new("Critical window (days)", config.urgency.critical_days.to_string()),
        KeyValue::new("Warning window (days)", config.urgency.warning_days.to_string()),
        KeyValue::new("Notice periods (days)", notice),
        KeyValue::new("Stale contact (months)", config.stale_contact_months.to_string()),
        KeyValue::new("Week starts on", format!("{:?}", config.week_start)),
    ];
    print_output(&rows, config, ctx.format)
}

fn print_config(config: &EngineConfig, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(config),
        _ => {
            print!("{}", config.to_toml_string()?);
            Ok(())
        }
    }
}
