//! Stale command implementation.
//!
//! Lists active deals whose partner has not been contacted recently.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use dealbook_engine::filter::filter;
use dealbook_engine::schedule::stale_contacts;

use crate::commands::{Context, FilterArgs};
use crate::output::{or_dash, print_header, print_output};

/// Arguments for the stale command.
#[derive(Args, Debug, Default)]
pub struct StaleArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Override the staleness window in months
    #[arg(long, value_name = "MONTHS")]
    pub months: Option<u32>,
}

#[derive(Debug, Serialize, Tabled)]
struct StaleRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Company")]
    company: String,
    #[tabled(rename = "Partner")]
    partner: String,
    #[tabled(rename = "Last Contact")]
    last_contact: String,
    #[tabled(rename = "Days Since")]
    days_since: String,
}

/// Execute the stale command.
pub fn execute(args: StaleArgs, ctx: &Context) -> Result<()> {
    let mut config = ctx.config.clone();
    if let Some(months) = args.months {
        config = config.with_stale_contact_months(months);
    }

    let criteria = args.filter.criteria()?;
    let deals = filter(&ctx.book.deals, &criteria);
    let stale = stale_contacts(&deals, ctx.today, &config);

    let rows: Vec<StaleRow> = stale
        .iter()
        .map(|deal| StaleRow {
            id: deal.id.clone(),
            company: deal.company_name.clone(),
            partner: deal.partner_name.clone(),
            last_contact: or_dash(deal.last_contact),
            days_since: or_dash(deal.last_contact.map(|d| d.days_between(&ctx.today))),
        })
        .collect();

    if ctx.is_table() {
        print_header(&format!(
            "No contact in {} months ({})",
            config.stale_contact_months,
            rows.len()
        ));
    }
    print_output(&rows, &stale, ctx.format)
}
