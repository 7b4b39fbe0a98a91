//! Summary command implementation.
//!
//! Prints aggregate totals for the filtered deals and, optionally, the rounds.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use dealbook_engine::aggregate::{summarize, AggregateSummary};
use dealbook_engine::filter::filter;

use crate::commands::{Context, FilterArgs};
use crate::output::{format_money, format_multiple, print_header, print_output, KeyValue};

/// Arguments for the summary command.
#[derive(Args, Debug, Default)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Also summarize financing rounds
    #[arg(long)]
    pub rounds: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryReport {
    deals: AggregateSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    rounds: Option<AggregateSummary>,
}

/// Execute the summary command.
pub fn execute(args: SummaryArgs, ctx: &Context) -> Result<()> {
    let criteria = args.filter.criteria()?;
    let report = SummaryReport {
        deals: summarize(&filter(&ctx.book.deals, &criteria)),
        rounds: args
            .rounds
            .then(|| summarize(&filter(&ctx.book.rounds, &criteria))),
    };

    let mut rows = summary_rows("Deals", &report.deals);
    if let Some(rounds) = &report.rounds {
        rows.extend(summary_rows("Rounds", rounds));
    }

    if ctx.is_table() {
        print_header("Portfolio Summary");
    }
    print_output(&rows, &report, ctx.format)
}

fn summary_rows(label: &str, summary: &AggregateSummary) -> Vec<KeyValue> {
    vec![
        KeyValue::new(format!("{label}: Count"), summary.count.to_string()),
        KeyValue::new(
            format!("{label}: Total Investment"),
            format_money(summary.total_investment),
        ),
        KeyValue::new(
            format!("{label}: Total Position"),
            format_money(summary.total_position_value),
        ),
        KeyValue::new(
            format!("{label}: Average MOIC"),
            format_multiple(summary.average_moic),
        ),
        KeyValue::new(
            format!("{label}: Weighted MOIC"),
            format_multiple(summary.weighted_moic),
        ),
    ]
}
