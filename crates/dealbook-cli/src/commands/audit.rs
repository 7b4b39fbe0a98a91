//! Audit command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use dealbook_core::types::Date;
use dealbook_engine::audit::audit_trail;
use dealbook_engine::filter::DateRange;

use crate::commands::{parse_date, Context};
use crate::output::{or_dash, print_header, print_output};

/// Arguments for the audit command.
#[derive(Args, Debug, Default)]
pub struct AuditArgs {
    /// Earliest entry date (YYYY-MM-DD). Defaults to no lower bound.
    #[arg(long)]
    pub from: Option<String>,

    /// Latest entry date (YYYY-MM-DD). Defaults to the reference date.
    #[arg(long)]
    pub to: Option<String>,

    /// Only entries for this document ID
    #[arg(long)]
    pub document: Option<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct AuditLine {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Document")]
    document: String,
    #[tabled(rename = "Company")]
    company: String,
    #[tabled(rename = "Action")]
    action: String,
    #[tabled(rename = "Actor")]
    actor: String,
    #[tabled(rename = "Note")]
    note: String,
}

/// Execute the audit command.
pub fn execute(args: AuditArgs, ctx: &Context) -> Result<()> {
    let start = args.from.as_deref().map(parse_date).transpose()?.unwrap_or(Date::MIN);
    let end = args.to.as_deref().map(parse_date).transpose()?.unwrap_or(ctx.today);
    let range = DateRange::new(start, end);

    let mut trail = audit_trail(&ctx.book.documents, &range);
    if let Some(id) = &args.document {
        trail.retain(|row| &row.document_id == id);
    }

    let rows: Vec<AuditLine> = trail
        .iter()
        .map(|row| AuditLine {
            date: row.entry.date.to_string(),
            document: row.document_title.clone(),
            company: row.company_name.clone(),
            action: row.entry.action.to_string(),
            actor: row.entry.actor.clone(),
            note: or_dash(row.entry.note.as_deref()),
        })
        .collect();

    if ctx.is_table() {
        print_header(&format!("Audit Trail ({} to {})", or_dash(args.from.as_deref()), end));
    }
    print_output(&rows, &trail, ctx.format)
}
