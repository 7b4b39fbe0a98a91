//! Rounds command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use dealbook_engine::view::build_view;

use crate::commands::{Context, FilterArgs};
use crate::output::{format_amount, format_multiple, or_dash, print_header, print_output};

/// Arguments for the rounds command.
#[derive(Args, Debug, Default)]
pub struct RoundsArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Debug, Serialize, Tabled)]
struct RoundRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Company")]
    company: String,
    #[tabled(rename = "Lead")]
    lead: String,
    #[tabled(rename = "Round")]
    round_type: String,
    #[tabled(rename = "Closes")]
    close_date: String,
    #[tabled(rename = "Raised")]
    raised: String,
    #[tabled(rename = "Post-Money")]
    post_money: String,
    #[tabled(rename = "Stake %")]
    stake: String,
    #[tabled(rename = "Our Cheque")]
    investment: String,
    #[tabled(rename = "MOIC")]
    moic: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Execute the rounds command.
pub fn execute(args: RoundsArgs, ctx: &Context) -> Result<()> {
    let criteria = args.filter.criteria()?;
    let view = build_view(&ctx.book.rounds, &criteria);

    let rows: Vec<RoundRow> = view
        .rows
        .iter()
        .map(|row| {
            let round = &row.record;
            RoundRow {
                id: round.id.clone(),
                company: round.company_name.clone(),
                lead: round.lead_partner.clone(),
                round_type: round.round_type.to_string(),
                close_date: or_dash(round.close_date),
                raised: format_amount(round.amount_raised, round.currency),
                post_money: format_amount(round.post_money_valuation(), round.currency),
                stake: format!("{:.2}", round.effective_stake()),
                investment: or_dash(round.our_investment.map(|v| format_amount(v, round.currency))),
                moic: format_multiple(row.metrics.moic),
                status: round.status.to_string(),
            }
        })
        .collect();

    if ctx.is_table() {
        print_header(&format!("Financing Rounds ({})", rows.len()));
    }
    print_output(&rows, &view, ctx.format)
}
