//! Legal documents and their audit trail.

use super::{AuditAction, DocumentStatus, DocumentType};
use crate::{EngineError, EngineResult};
use dealbook_core::types::Date;
use serde::{Deserialize, Serialize};

/// One event in a document's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    /// When it happened.
    pub date: Date,
    /// Who did it.
    pub actor: String,
    /// What was done.
    pub action: AuditAction,
    /// Free-text note.
    #[serde(default)]
    pub note: Option<String>,
}

/// A legal document attached to a deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalDocument {
    /// Unique identifier.
    pub id: String,
    /// Document title.
    pub title: String,
    /// Stored file name.
    pub filename: String,
    /// Category.
    pub doc_type: DocumentType,
    /// Signing lifecycle status.
    pub status: DocumentStatus,
    /// Company the document concerns.
    pub company_name: String,
    /// Counterparty partner.
    pub partner_name: String,
    /// Upload date.
    pub uploaded_on: Date,
    /// Uploading user.
    pub uploaded_by: String,
    /// Version number, starting at 1.
    #[serde(default = "first_version")]
    pub version: u32,
    /// Audit events in the order they were recorded.
    #[serde(default)]
    pub audit: Vec<AuditEntry>,
}

fn first_version() -> u32 {
    1
}

impl LegalDocument {
    /// The most recent audit event.
    ///
    /// Events on the same day resolve to the one recorded last.
    #[must_use]
    pub fn latest_activity(&self) -> Option<&AuditEntry> {
        self.audit
            .iter()
            .enumerate()
            .max_by_key(|(i, e)| (e.date, *i))
            .map(|(_, e)| e)
    }

    /// Checks the document invariants.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty id, a zero version, or an audit event
    /// dated before the upload.
    pub fn validate(&self) -> EngineResult<()> {
        if self.id.trim().is_empty() {
            return Err(EngineError::missing_field("id"));
        }
        if self.version == 0 {
            return Err(EngineError::invalid_record(&self.id, "version starts at 1"));
        }
        if let Some(early) = self.audit.iter().find(|e| e.date < self.uploaded_on) {
            return Err(EngineError::invalid_record(
                &self.id,
                format!("audit event on {} predates upload", early.date),
            ));
        }
        Ok(())
    }
}
