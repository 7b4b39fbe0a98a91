//! Flattened audit trail across documents.

use crate::filter::DateRange;
use crate::types::{AuditEntry, LegalDocument};
use serde::{Deserialize, Serialize};

/// One audit event together with the document it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRow {
    /// Document ID.
    pub document_id: String,
    /// Document title.
    pub document_title: String,
    /// Company the document concerns.
    pub company_name: String,
    /// The event.
    pub entry: AuditEntry,
}

/// Every audit event dated within `range`, newest first.
///
/// Events on the same day come in reverse feed order, so the one recorded
/// last is listed first.
#[must_use]
pub fn audit_trail(documents: &[LegalDocument], range: &DateRange) -> Vec<AuditRow> {
    let mut rows: Vec<(usize, AuditRow)> = documents
        .iter()
        .flat_map(|doc| {
            doc.audit
                .iter()
                .filter(|e| range.contains(e.date))
                .map(move |e| AuditRow {
                    document_id: doc.id.clone(),
                    document_title: doc.title.clone(),
                    company_name: doc.company_name.clone(),
                    entry: e.clone(),
                })
        })
        .enumerate()
        .collect();

    rows.sort_by(|(ia, a), (ib, b)| b.entry.date.cmp(&a.entry.date).then(ib.cmp(ia)));
    rows.into_iter().map(|(_, row)| row).collect()
}

/// The most recent audit event on a document.
#[must_use]
pub fn latest_activity(document: &LegalDocument) -> Option<&AuditEntry> {
    document.latest_activity()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AuditAction, DocumentStatus, DocumentType};
    use dealbook_core::types::Date;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn entry(date: Date, action: AuditAction) -> AuditEntry {
        AuditEntry {
            date,
            actor: "legal".into(),
            action,
            note: None,
        }
    }

    fn doc(id: &str, audit: Vec<AuditEntry>) -> LegalDocument {
        LegalDocument {
            id: id.into(),
            title: format!("{id} term sheet"),
            filename: format!("{id}.pdf"),
            doc_type: DocumentType::TermSheet,
            status: DocumentStatus::Executed,
            company_name: "Ledgerline".into(),
            partner_name: "Mediobanca".into(),
            uploaded_on: d(2024, 1, 1),
            uploaded_by: "legal".into(),
            version: 1,
            audit,
        }
    }

    #[test]
    fn test_newest_first_within_range() {
        let docs = vec![
            doc(
                "D1",
                vec![
                    entry(d(2024, 1, 1), AuditAction::Uploaded),
                    entry(d(2024, 2, 10), AuditAction::Signed),
                ],
            ),
            doc(
                "D2",
                vec![
                    entry(d(2024, 1, 5), AuditAction::Uploaded),
                    entry(d(2024, 2, 10), AuditAction::Viewed),
                    entry(d(2024, 3, 1), AuditAction::Shared),
                ],
            ),
        ];
        let range = DateRange::new(d(2024, 1, 2), d(2024, 2, 29));
        let trail = audit_trail(&docs, &range);

        let seen: Vec<(&str, AuditAction)> = trail
            .iter()
            .map(|r| (r.document_id.as_str(), r.entry.action))
            .collect();
        assert_eq!(
            seen,
            [
                ("D2", AuditAction::Viewed),
                ("D1", AuditAction::Signed),
                ("D2", AuditAction::Uploaded),
            ]
        );
    }

    #[test]
    fn test_empty_range_yields_nothing() {
        let docs = vec![doc("D1", vec![entry(d(2024, 1, 1), AuditAction::Uploaded)])];
        let range = DateRange::new(d(2025, 1, 1), d(2025, 12, 31));
        assert!(audit_trail(&docs, &range).is_empty());
    }

    #[test]
    fn test_latest_activity() {
        let document = doc(
            "D1",
            vec![
                entry(d(2024, 2, 10), AuditAction::Signed),
                entry(d(2024, 1, 1), AuditAction::Uploaded),
            ],
        );
        assert_eq!(latest_activity(&document).unwrap().action, AuditAction::Signed);
    }
}
