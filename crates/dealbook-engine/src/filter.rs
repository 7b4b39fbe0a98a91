//! Record filtering.
//!
//! A record passes [`filter`] only if it matches every criterion that is
//! set. Unset criteria, and the literal `"All"` sentinel used by dashboard
//! dropdowns, match everything. Nothing here fails: an unknown partner or
//! status label simply matches no records.

use crate::constants::ALL_FILTER;
use crate::record::Record;
use dealbook_core::types::Date;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First date in the range.
    pub start: Date,
    /// Last date in the range.
    pub end: Date,
}

impl DateRange {
    /// Creates a range. Bounds given in reverse order are swapped.
    #[must_use]
    pub fn new(start: Date, end: Date) -> Self {
        if end < start {
            Self {
                start: end,
                end: start,
            }
        } else {
            Self { start, end }
        }
    }

    /// Whether `date` lies within the range, bounds included.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Criteria for [`filter`].
///
/// # Example
///
/// ```rust
/// use dealbook_engine::filter::FilterCriteria;
///
/// let criteria = FilterCriteria::new()
///     .with_partner("Aviva")
///     .with_search("ventures");
/// assert!(!criteria.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Exact partner name.
    pub partner: Option<String>,
    /// Exact status label.
    pub status: Option<String>,
    /// Exact kind or type label.
    pub kind: Option<String>,
    /// Case-insensitive substring searched in the record's text fields.
    pub search: Option<String>,
    /// Inclusive range tested against the record's key date.
    pub date_range: Option<DateRange>,
    /// `Some(true)` keeps only concluded records, `Some(false)` only active ones.
    pub concluded: Option<bool>,
}

impl FilterCriteria {
    /// Criteria that match every record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to one partner.
    #[must_use]
    pub fn with_partner(mut self, partner: impl Into<String>) -> Self {
        self.partner = Some(partner.into());
        self
    }

    /// Restricts to one status label.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Restricts to one kind or type label.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Adds a free-text search.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Restricts key dates to an inclusive range.
    #[must_use]
    pub fn with_date_range(mut self, start: Date, end: Date) -> Self {
        self.date_range = Some(DateRange::new(start, end));
        self
    }

    /// Keeps only concluded (`true`) or only active (`false`) records.
    #[must_use]
    pub fn with_concluded(mut self, concluded: bool) -> Self {
        self.concluded = Some(concluded);
        self
    }

    /// True when no criterion would exclude anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        label_criterion(self.partner.as_deref()).is_none()
            && label_criterion(self.status.as_deref()).is_none()
            && label_criterion(self.kind.as_deref()).is_none()
            && search_criterion(self.search.as_deref()).is_none()
            && self.date_range.is_none()
            && self.concluded.is_none()
    }

    /// Whether a single record satisfies every set criterion.
    #[must_use]
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        if let Some(partner) = label_criterion(self.partner.as_deref()) {
            if record.partner() != partner {
                return false;
            }
        }
        if let Some(status) = label_criterion(self.status.as_deref()) {
            if record.status_label() != Some(status) {
                return false;
            }
        }
        if let Some(kind) = label_criterion(self.kind.as_deref()) {
            if record.kind_label() != Some(kind) {
                return false;
            }
        }
        if let Some(needle) = search_criterion(self.search.as_deref()) {
            let needle = needle.to_lowercase();
            let found = record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !found {
                return false;
            }
        }
        if let Some(range) = &self.date_range {
            match record.key_date() {
                Some(date) if range.contains(date) => {}
                _ => return false,
            }
        }
        if let Some(concluded) = self.concluded {
            if record.is_concluded() != concluded {
                return false;
            }
        }
        true
    }
}

fn label_criterion(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && *v != ALL_FILTER)
}

fn search_criterion(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Returns the records matching `criteria`, in input order.
///
/// The input is never modified; empty criteria return an equal copy.
#[must_use]
pub fn filter<R: Record + Clone>(records: &[R], criteria: &FilterCriteria) -> Vec<R> {
    let result = filter_by(records, |r| criteria.matches(r));
    debug!(
        input = records.len(),
        output = result.len(),
        "filtered records"
    );
    result
}

/// Returns the records for which `predicate` holds, in input order.
#[must_use]
pub fn filter_by<R, F>(records: &[R], predicate: F) -> Vec<R>
where
    R: Clone,
    F: Fn(&R) -> bool,
{
    records.iter().filter(|r| predicate(r)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DealKind, DealRecord, DealStatus, Stage};
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn deals() -> Vec<DealRecord> {
        vec![
            DealRecord::builder()
                .id("JV-001")
                .kind(DealKind::JointVenture)
                .company_name("Aviva Ventures Ltd")
                .partner_name("Aviva")
                .due_date(d(2025, 3, 31))
                .investment_amount(dec!(15_000_000))
                .build()
                .unwrap(),
            DealRecord::builder()
                .id("S-001")
                .kind(DealKind::Studio)
                .company_name("Claimly")
                .partner_name("Aviva")
                .stage(Stage::Exit)
                .status(DealStatus::Completed)
                .close_date(d(2024, 11, 15))
                .build()
                .unwrap(),
            DealRecord::builder()
                .id("A-001")
                .kind(DealKind::Accelerator)
                .company_name("Ledgerline")
                .partner_name("Mediobanca")
                .stage(Stage::ActiveProgram)
                .status(DealStatus::AtRisk)
                .build()
                .unwrap(),
        ]
    }

    fn ids(records: &[DealRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let all = deals();
        assert!(FilterCriteria::new().is_empty());
        assert_eq!(filter(&all, &FilterCriteria::new()), all);
    }

    #[test]
    fn test_all_sentinel_is_noop() {
        let all = deals();
        let criteria = FilterCriteria::new()
            .with_partner("All")
            .with_status("All")
            .with_kind("All")
            .with_search("   ");
        assert!(criteria.is_empty());
        assert_eq!(filter(&all, &criteria).len(), 3);
    }

    #[test]
    fn test_partner_is_exact_and_case_sensitive() {
        let all = deals();
        assert_eq!(
            ids(&filter(&all, &FilterCriteria::new().with_partner("Aviva"))),
            ["JV-001", "S-001"]
        );
        assert!(filter(&all, &FilterCriteria::new().with_partner("aviva")).is_empty());
        assert!(filter(&all, &FilterCriteria::new().with_partner("Unknown")).is_empty());
    }

    #[test]
    fn test_status_and_kind() {
        let all = deals();
        let at_risk = filter(&all, &FilterCriteria::new().with_status("At Risk"));
        assert_eq!(ids(&at_risk), ["A-001"]);

        let studio = filter(&all, &FilterCriteria::new().with_kind("Studio"));
        assert_eq!(ids(&studio), ["S-001"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let all = deals();
        let found = filter(&all, &FilterCriteria::new().with_search("LEDGER"));
        assert_eq!(ids(&found), ["A-001"]);

        // Stage labels are searchable too.
        let found = filter(&all, &FilterCriteria::new().with_search("active prog"));
        assert_eq!(ids(&found), ["A-001"]);
    }

    #[test]
    fn test_date_range_inclusive_and_missing_dates_fail() {
        let all = deals();
        let criteria = FilterCriteria::new().with_date_range(d(2024, 11, 15), d(2025, 3, 31));
        assert_eq!(ids(&filter(&all, &criteria)), ["JV-001", "S-001"]);

        let narrow = FilterCriteria::new().with_date_range(d(2024, 11, 16), d(2025, 3, 30));
        assert!(filter(&all, &narrow).is_empty());
    }

    #[test]
    fn test_reversed_range_is_normalized() {
        let range = DateRange::new(d(2025, 1, 31), d(2025, 1, 1));
        assert_eq!(range.start, d(2025, 1, 1));
        assert!(range.contains(d(2025, 1, 15)));
    }

    #[test]
    fn test_concluded_flag() {
        let all = deals();
        let done = filter(&all, &FilterCriteria::new().with_concluded(true));
        assert_eq!(ids(&done), ["S-001"]);

        let active = filter(&all, &FilterCriteria::new().with_concluded(false));
        assert_eq!(ids(&active), ["JV-001", "A-001"]);
    }

    #[test]
    fn test_input_untouched() {
        let all = deals();
        let before = all.clone();
        let _ = filter(&all, &FilterCriteria::new().with_partner("Mediobanca"));
        assert_eq!(all, before);
    }

    #[test]
    fn test_filter_by_predicate() {
        let all = deals();
        let big = filter_by(&all, |r| r.investment_amount.is_some());
        assert_eq!(ids(&big), ["JV-001"]);
    }
}
