//! Renewal schedule and relationship follow-ups.

use crate::types::{DealRecord, EngineConfig};
use crate::urgency::{compute_urgency, is_stale_contact, notice_milestone, UrgencyWindow};
use dealbook_core::types::Date;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One upcoming renewal or contractual deadline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenewalEntry {
    /// The deal carrying the deadline.
    pub deal: DealRecord,
    /// Distance to the due date.
    pub urgency: UrgencyWindow,
    /// Tightest notice period already entered, if any.
    pub notice_milestone: Option<i64>,
}

/// Active deals with a due date, soonest first.
///
/// Overdue deadlines sort ahead of everything else. Ties keep input order.
#[must_use]
pub fn renewal_schedule(
    deals: &[DealRecord],
    now: Date,
    config: &EngineConfig,
) -> Vec<RenewalEntry> {
    let mut entries: Vec<RenewalEntry> = deals
        .iter()
        .filter(|d| !d.is_concluded())
        .filter_map(|deal| {
            let due = deal.due_date?;
            let urgency = compute_urgency(due, now, &config.urgency);
            Some(RenewalEntry {
                deal: deal.clone(),
                urgency,
                notice_milestone: notice_milestone(urgency.days_until, &config.notice_periods_days),
            })
        })
        .collect();
    entries.sort_by_key(|e| e.urgency.days_until);
    debug!(entries = entries.len(), %now, "built renewal schedule");
    entries
}

/// Active deals whose partner has not been contacted within
/// `config.stale_contact_months`, in input order.
///
/// A deal with no recorded contact counts as stale.
#[must_use]
pub fn stale_contacts(deals: &[DealRecord], now: Date, config: &EngineConfig) -> Vec<DealRecord> {
    deals
        .iter()
        .filter(|d| !d.is_concluded())
        .filter(|d| is_stale_contact(d.last_contact, now, config.stale_contact_months))
        .cloned()
        .collect()
}
