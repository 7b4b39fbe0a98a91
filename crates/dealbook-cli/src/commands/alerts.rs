//! Alerts command implementation.
//!
//! Shows the pending alert queue, or acknowledges one alert.

use anyhow::{Context as _, Result};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use dealbook_engine::alerts::alert_queue;
use dealbook_engine::filter::filter;
use dealbook_engine::urgency::compute_urgency;
use dealbook_engine::{Alert, DealBook};

use crate::commands::{display_path, Context, FilterArgs};
use crate::output::{print_header, print_output, print_success, print_warning, tier_label};

/// Arguments for the alerts command.
#[derive(Args, Debug, Default)]
pub struct AlertsArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Acknowledge the alert with this ID
    #[arg(long, value_name = "ID")]
    pub ack: Option<String>,

    /// Write the acknowledgement back to the data feed
    #[arg(long, requires = "ack")]
    pub save: bool,

    /// Include acknowledged alerts
    #[arg(long)]
    pub all: bool,
}

#[derive(Debug, Serialize, Tabled)]
struct AlertRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Company")]
    company: String,
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "Days")]
    days: i64,
    #[tabled(rename = "Urgency")]
    urgency: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Execute the alerts command.
pub fn execute(args: AlertsArgs, ctx: &Context) -> Result<()> {
    let acknowledged;
    let book = match &args.ack {
        Some(id) => {
            acknowledged = ctx.book.acknowledge_alert(id)?;
            if ctx.is_table() {
                print_success(&format!("Acknowledged alert {id}"));
            }
            if args.save {
                save(&acknowledged, ctx)?;
            }
            &acknowledged
        }
        None => &ctx.book,
    };

    let criteria = args.filter.criteria()?;
    let alerts: Vec<Alert> = filter(&book.alerts, &criteria);

    if args.all {
        let rows: Vec<AlertRow> = alerts.iter().map(|a| alert_row(a, ctx)).collect();
        if ctx.is_table() {
            print_header(&format!("All Alerts ({})", rows.len()));
        }
        return print_output(&rows, &alerts, ctx.format);
    }

    let queue = alert_queue(&alerts, ctx.today, &ctx.config);
    let rows: Vec<AlertRow> = queue.iter().map(|entry| alert_row(&entry.alert, ctx)).collect();
    if ctx.is_table() {
        print_header(&format!("Pending Alerts ({})", rows.len()));
    }
    print_output(&rows, &queue, ctx.format)
}

fn alert_row(alert: &Alert, ctx: &Context) -> AlertRow {
    let urgency = compute_urgency(alert.due_date, ctx.today, &ctx.config.urgency);
    AlertRow {
        id: alert.id.clone(),
        kind: alert.kind.to_string(),
        title: alert.title.clone(),
        company: alert.company_name.clone(),
        due: alert.due_date.to_string(),
        days: urgency.days_until,
        urgency: if ctx.is_table() {
            tier_label(urgency.tier)
        } else {
            urgency.tier.to_string()
        },
        status: alert.status_label().to_string(),
    }
}

fn save(book: &DealBook, ctx: &Context) -> Result<()> {
    let Some(path) = &ctx.data_path else {
        print_warning("No --data file given; acknowledgement not saved");
        return Ok(());
    };
    let json = book.to_json()?;
    std::fs::write(path, json)
        .with_context(|| format!("Cannot write data feed {}", display_path(Some(path))))?;
    info!(path = %path.display(), "saved data feed");
    if ctx.is_table() {
        print_success(&format!("Saved {}", display_path(Some(path))));
    }
    Ok(())
}
