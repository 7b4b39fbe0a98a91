//! Calendar command implementation.
//!
//! Renders one month as a week grid with deal dates and alert deadlines
//! marked, followed by the list of events.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::collections::BTreeSet;
use tabled::{builder::Builder, settings::Style, Tabled};

use dealbook_core::calendar::{CalendarMonth, WeekStart};
use dealbook_core::types::Date;
use dealbook_engine::grouping::events_in_month;
use dealbook_engine::{Alert, DealRecord};

use crate::commands::{parse_month, Context};
use crate::output::{print_header, print_output};

/// Arguments for the calendar command.
#[derive(Args, Debug, Default)]
pub struct CalendarArgs {
    /// Month to show (YYYY-MM). Defaults to the reference date's month.
    #[arg(short, long)]
    pub month: Option<String>,

    /// Leave acknowledged alerts off the calendar
    #[arg(long)]
    pub pending_only: bool,
}

/// One dated item on the calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
#[serde(rename_all = "camelCase")]
struct CalendarEvent {
    #[tabled(rename = "Date")]
    date: Date,
    #[tabled(rename = "Source")]
    source: &'static str,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Event")]
    title: String,
    #[tabled(rename = "Company")]
    company: String,
}

/// Execute the calendar command.
pub fn execute(args: CalendarArgs, ctx: &Context) -> Result<()> {
    let month = match &args.month {
        Some(s) => parse_month(s)?,
        None => CalendarMonth::from_date(ctx.today),
    };

    let alerts: Vec<Alert> = if args.pending_only {
        ctx.book.alerts.iter().filter(|a| !a.acknowledged).cloned().collect()
    } else {
        ctx.book.alerts.clone()
    };
    let events = collect_events(&ctx.book.deals, &alerts, month);

    if ctx.is_table() {
        print_header(&month.label());
        let marked: BTreeSet<Date> = events.iter().map(|e| e.date).collect();
        println!("{}", render_grid(month, ctx.config.week_start, &marked, ctx.today));
    }
    print_output(&events, &events, ctx.format)
}

fn collect_events(
    deals: &[DealRecord],
    alerts: &[Alert],
    month: CalendarMonth,
) -> Vec<CalendarEvent> {
    let mut events: Vec<CalendarEvent> = Vec::new();
    for (date, deals) in events_in_month(deals, month) {
        events.extend(deals.into_iter().map(|deal| CalendarEvent {
            date,
            source: "deal",
            title: format!("{} ({})", deal.kind, deal.status),
            id: deal.id,
            company: deal.company_name,
        }));
    }
    for (date, alerts) in events_in_month(alerts, month) {
        events.extend(alerts.into_iter().map(|alert| CalendarEvent {
            date,
            source: "alert",
            id: alert.id,
            title: alert.title,
            company: alert.company_name,
        }));
    }
    // Stable sort keeps deals ahead of alerts on the same day.
    events.sort_by_key(|e| e.date);
    events
}

fn weekday_headers(week_start: WeekStart) -> [&'static str; 7] {
    match week_start {
        WeekStart::Sunday => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
        WeekStart::Monday => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
    }
}

/// Renders the month grid. Event days carry `*`, the reference date `[ ]`.
fn render_grid(
    month: CalendarMonth,
    week_start: WeekStart,
    marked: &BTreeSet<Date>,
    today: Date,
) -> String {
    let mut builder = Builder::default();
    builder.push_record(weekday_headers(week_start).map(String::from));

    let cells: Vec<String> = month
        .grid(week_start)
        .into_iter()
        .map(|cell| match cell {
            None => String::new(),
            Some(date) => {
                let mut label = date.day().to_string();
                if marked.contains(&date) {
                    label.push('*');
                }
                if date == today {
                    label = format!("[{label}]");
                }
                label
            }
        })
        .collect();
    for week in cells.chunks(7) {
        builder.push_record(week.to_vec());
    }

    builder.build().with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn ctx() -> Context {
        Context::load(None, None, Some("2025-01-15"), OutputFormat::Table).unwrap()
    }

    #[test]
    fn test_collect_events_february() {
        let ctx = ctx();
        let month: CalendarMonth = "2025-02".parse().unwrap();
        let events = collect_events(&ctx.book.deals, &ctx.book.alerts, month);

        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["JV-002", "AL-005"]);
        assert!(events.iter().all(|e| month.contains(e.date)));
    }

    #[test]
    fn test_render_grid_marks_days() {
        let month: CalendarMonth = "2025-01".parse().unwrap();
        let marked: BTreeSet<Date> =
            [Date::from_ymd(2025, 1, 20).unwrap()].into_iter().collect();
        let today = Date::from_ymd(2025, 1, 15).unwrap();
        let grid = render_grid(month, WeekStart::Monday, &marked, today);

        assert!(grid.contains("Mon"));
        assert!(grid.contains("20*"));
        assert!(grid.contains("[15]"));
        assert!(grid.contains("31"));
    }
}
