//! Renewals command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use dealbook_engine::filter::filter;
use dealbook_engine::schedule::renewal_schedule;

use crate::commands::{Context, FilterArgs};
use crate::output::{or_dash, print_header, print_output, tier_label};

/// Arguments for the renewals command.
#[derive(Args, Debug, Default)]
pub struct RenewalsArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Only renewals due within this many days (overdue ones always show)
    #[arg(long, value_name = "DAYS")]
    pub within: Option<i64>,
}

#[derive(Debug, Serialize, Tabled)]
struct RenewalRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Company")]
    company: String,
    #[tabled(rename = "Partner")]
    partner: String,
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "Days")]
    days: i64,
    #[tabled(rename = "Urgency")]
    urgency: String,
    #[tabled(rename = "Notice")]
    notice: String,
}

/// Execute the renewals command.
pub fn execute(args: RenewalsArgs, ctx: &Context) -> Result<()> {
    let criteria = args.filter.criteria()?;
    let deals = filter(&ctx.book.deals, &criteria);
    let mut schedule = renewal_schedule(&deals, ctx.today, &ctx.config);
    if let Some(within) = args.within {
        schedule.retain(|entry| entry.urgency.days_until <= within);
    }

    let rows: Vec<RenewalRow> = schedule
        .iter()
        .map(|entry| RenewalRow {
            id: entry.deal.id.clone(),
            company: entry.deal.company_name.clone(),
            partner: entry.deal.partner_name.clone(),
            due: entry.urgency.target.to_string(),
            days: entry.urgency.days_until,
            urgency: if ctx.is_table() {
                tier_label(entry.urgency.tier)
            } else {
                entry.urgency.tier.to_string()
            },
            notice: or_dash(entry.notice_milestone.map(|d| format!("{d}-day"))),
        })
        .collect();

    if ctx.is_table() {
        print_header(&format!("Renewals as of {}", ctx.today));
    }
    print_output(&rows, &schedule, ctx.format)
}
