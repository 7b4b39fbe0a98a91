//! Deals command implementation.
//!
//! Lists deals matching the filter flags with their derived metrics.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use dealbook_engine::view::{build_view, DealView};
use dealbook_engine::DealRecord;

use crate::commands::{Context, FilterArgs};
use crate::output::{
    format_amount, format_money, format_multiple, format_pct, or_dash, print_header,
    print_output, KeyValue,
};

/// Arguments for the deals command.
#[derive(Args, Debug, Default)]
pub struct DealsArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Hide the totals table
    #[arg(long)]
    pub no_totals: bool,
}

/// One deal line.
#[derive(Debug, Serialize, Tabled)]
struct DealRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Company")]
    company: String,
    #[tabled(rename = "Partner")]
    partner: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Stage")]
    stage: String,
    #[tabled(rename = "Investment")]
    investment: String,
    #[tabled(rename = "Position")]
    position: String,
    #[tabled(rename = "MOIC")]
    moic: String,
    #[tabled(rename = "ROI")]
    roi: String,
}

/// Execute the deals command.
pub fn execute(args: DealsArgs, ctx: &Context) -> Result<()> {
    let criteria = args.filter.criteria()?;
    let view = build_view(&ctx.book.deals, &criteria);

    let rows = deal_rows(&view);
    if ctx.is_table() {
        print_header(&format!("Deals ({} of {})", view.rows.len(), ctx.book.deals.len()));
    }
    print_output(&rows, &view, ctx.format)?;

    if ctx.is_table() && !args.no_totals && !view.is_empty() {
        let totals = &view.totals;
        let summary = vec![
            KeyValue::new("Deals", totals.count.to_string()),
            KeyValue::new("Total Investment", format_money(totals.total_investment)),
            KeyValue::new("Total Position", format_money(totals.total_position_value)),
            KeyValue::new("Average MOIC", format_multiple(totals.average_moic)),
            KeyValue::new("Weighted MOIC", format_multiple(totals.weighted_moic)),
        ];
        print_header("Totals");
        print_output(&summary, &summary, ctx.format)?;
    }
    Ok(())
}

fn deal_rows(view: &DealView<DealRecord>) -> Vec<DealRow> {
    view.rows
        .iter()
        .map(|row| {
            let deal = &row.record;
            DealRow {
                id: deal.id.clone(),
                company: deal.company_name.clone(),
                partner: deal.partner_name.clone(),
                kind: deal.kind.to_string(),
                status: deal.status.to_string(),
                stage: or_dash(deal.stage),
                investment: format_amount(row.metrics.investment, deal.currency),
                position: format_amount(row.metrics.position_value, deal.currency),
                moic: format_multiple(row.metrics.moic),
                roi: format_pct(row.metrics.roi_pct),
            }
        })
        .collect()
}
