//! Documents command implementation.
//!
//! Searches the legal document library.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use dealbook_engine::audit::latest_activity;
use dealbook_engine::filter::filter;

use crate::commands::{Context, FilterArgs};
use crate::output::{print_header, print_output};

/// Arguments for the documents command.
#[derive(Args, Debug, Default)]
pub struct DocumentsArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Debug, Serialize, Tabled)]
struct DocumentRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Type")]
    doc_type: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Company")]
    company: String,
    #[tabled(rename = "Uploaded")]
    uploaded_on: String,
    #[tabled(rename = "Ver")]
    version: u32,
    #[tabled(rename = "Last Activity")]
    last_activity: String,
}

/// Execute the documents command.
pub fn execute(args: DocumentsArgs, ctx: &Context) -> Result<()> {
    let criteria = args.filter.criteria()?;
    let documents = filter(&ctx.book.documents, &criteria);

    let rows: Vec<DocumentRow> = documents
        .iter()
        .map(|doc| DocumentRow {
            id: doc.id.clone(),
            title: doc.title.clone(),
            doc_type: doc.doc_type.to_string(),
            status: doc.status.to_string(),
            company: doc.company_name.clone(),
            uploaded_on: doc.uploaded_on.to_string(),
            version: doc.version,
            last_activity: latest_activity(doc).map_or_else(
                || "-".to_string(),
                |entry| format!("{} {} by {}", entry.date, entry.action, entry.actor),
            ),
        })
        .collect();

    if ctx.is_table() {
        print_header(&format!("Documents ({})", rows.len()));
    }
    print_output(&rows, &documents, ctx.format)
}
