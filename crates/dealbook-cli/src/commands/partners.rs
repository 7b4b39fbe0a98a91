//! Partners command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use dealbook_engine::filter::filter;
use dealbook_engine::grouping::{group_by_partner, summarize_groups};

use crate::commands::{Context, FilterArgs};
use crate::output::{format_money, format_multiple, format_pct, print_header, print_output};

/// Arguments for the partners command.
#[derive(Args, Debug, Default)]
pub struct PartnersArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Debug, Serialize, Tabled)]
struct PartnerRow {
    #[tabled(rename = "Partner")]
    partner: String,
    #[tabled(rename = "Deals")]
    deals: usize,
    #[tabled(rename = "Investment")]
    investment: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "Position")]
    position: String,
    #[tabled(rename = "Avg MOIC")]
    average_moic: String,
    #[tabled(rename = "Wtd MOIC")]
    weighted_moic: String,
}

/// Execute the partners command.
pub fn execute(args: PartnersArgs, ctx: &Context) -> Result<()> {
    let criteria = args.filter.criteria()?;
    let deals = filter(&ctx.book.deals, &criteria);
    let groups = summarize_groups(&group_by_partner(&deals));

    let rows: Vec<PartnerRow> = groups
        .iter()
        .map(|(partner, metrics)| PartnerRow {
            partner: partner.clone(),
            deals: metrics.summary.count,
            investment: format_money(metrics.summary.total_investment),
            share: format_pct(metrics.investment_share_pct),
            position: format_money(metrics.summary.total_position_value),
            average_moic: format_multiple(metrics.summary.average_moic),
            weighted_moic: format_multiple(metrics.summary.weighted_moic),
        })
        .collect();

    if ctx.is_table() {
        print_header("Partners");
    }
    print_output(&rows, &groups, ctx.format)
}
