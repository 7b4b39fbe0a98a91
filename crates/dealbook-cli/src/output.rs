//! Output formatting utilities.

use colored::Colorize;
use dealbook_core::types::Currency;
use dealbook_engine::urgency::UrgencyTier;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Formats and prints rows based on the specified format.
///
/// `json` is what the JSON format prints; it is usually the engine value the
/// rows were built from, so JSON output keeps full precision.
pub fn print_output<T, J>(rows: &[T], json: &J, format: OutputFormat) -> anyhow::Result<()>
where
    T: Serialize + Tabled,
    J: Serialize + ?Sized,
{
    match format {
        OutputFormat::Table => print_table(rows),
        OutputFormat::Json => print_json(json),
        OutputFormat::Csv => print_csv(rows),
    }
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(rows: &[T]) -> anyhow::Result<()> {
    if rows.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{table}");
    Ok(())
}

/// Prints data as JSON.
pub fn print_json<J: Serialize + ?Sized>(data: &J) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(rows: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Formats money with thousands separators and no decimals.
pub fn format_money(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{out}")
    } else {
        out
    }
}

/// Formats money with its currency symbol, e.g. `£15,000,000` or `CHF 250,000`.
pub fn format_amount(value: Decimal, currency: Currency) -> String {
    let symbol = currency.symbol();
    let digits = format_money(value.abs());
    let sign = if value.is_sign_negative() && digits != "0" {
        "-"
    } else {
        ""
    };
    if symbol.chars().count() > 1 {
        format!("{sign}{symbol} {digits}")
    } else {
        format!("{sign}{symbol}{digits}")
    }
}

/// Formats a multiple, e.g. `3.00x`.
pub fn format_multiple(value: f64) -> String {
    format!("{value:.2}x")
}

/// Formats a percentage with one decimal.
pub fn format_pct(value: f64) -> String {
    format!("{value:.1}%")
}

/// Formats an optional value, or a dash.
pub fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Urgency tier label, coloured by severity.
pub fn tier_label(tier: UrgencyTier) -> String {
    match tier {
        UrgencyTier::Overdue => tier.as_str().red().bold().to_string(),
        UrgencyTier::Critical => tier.as_str().red().to_string(),
        UrgencyTier::Warning => tier.as_str().yellow().to_string(),
        UrgencyTier::Ok => tier.as_str().green().to_string(),
    }
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}
