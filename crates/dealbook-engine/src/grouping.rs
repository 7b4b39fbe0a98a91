//! Grouping records by partner, company or any other key.
//!
//! Groups are a total partition of the input: every record lands in exactly
//! one group. Keys are kept in a `BTreeMap` so iteration order is
//! alphabetical and stable between runs.

use crate::aggregate::{summarize, AggregateSummary};
use crate::record::{Record, Valued};
use dealbook_core::calendar::CalendarMonth;
use dealbook_core::types::Date;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Records partitioned by a string key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grouping<R> {
    groups: BTreeMap<String, Vec<R>>,
}

impl<R> Default for Grouping<R> {
    fn default() -> Self {
        Self {
            groups: BTreeMap::new(),
        }
    }
}

impl<R> Grouping<R> {
    /// Records for one key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[R]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Keys in alphabetical order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if there are no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total records across all groups.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Groups in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[R])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Consumes the grouping and returns the underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, Vec<R>> {
        self.groups
    }
}

/// Groups records by a key function. Records keep their input order
/// within each group.
///
/// # Example
///
/// ```rust,ignore
/// // Group deals by sector, with a bucket for deals that have none
/// let by_sector = group_by(&deals, |d| d.sector.clone().unwrap_or_default());
/// ```
#[must_use]
pub fn group_by<R, F>(records: &[R], key_fn: F) -> Grouping<R>
where
    R: Clone,
    F: Fn(&R) -> String,
{
    let mut groups: BTreeMap<String, Vec<R>> = BTreeMap::new();
    for record in records {
        groups.entry(key_fn(record)).or_default().push(record.clone());
    }
    debug!(records = records.len(), groups = groups.len(), "grouped records");
    Grouping { groups }
}

/// Groups records by exact partner name.
#[must_use]
pub fn group_by_partner<R: Record + Clone>(records: &[R]) -> Grouping<R> {
    group_by(records, |r| r.partner().to_string())
}

/// Groups records by exact company name.
#[must_use]
pub fn group_by_company<R: Record + Clone>(records: &[R]) -> Grouping<R> {
    group_by(records, |r| r.company().to_string())
}

/// Summary for one group.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupMetrics {
    /// Totals over the group's records.
    pub summary: AggregateSummary,
    /// Group investment as a percentage of all groups' investment (0-100).
    pub investment_share_pct: f64,
}

/// Summarizes every group and its share of total investment.
#[must_use]
pub fn summarize_groups<R: Valued>(grouping: &Grouping<R>) -> BTreeMap<String, GroupMetrics> {
    let summaries: Vec<(&str, AggregateSummary)> = grouping
        .iter()
        .map(|(key, records)| (key, summarize(records)))
        .collect();

    let total: Decimal = summaries
        .iter()
        .map(|(_, s)| s.total_investment)
        .fold(Decimal::ZERO, Decimal::saturating_add);

    summaries
        .into_iter()
        .map(|(key, summary)| {
            let share = if total.is_zero() {
                0.0
            } else {
                summary
                    .total_investment
                    .checked_div(total)
                    .and_then(|r| r.to_f64())
                    .map_or(0.0, |r| r * 100.0)
            };
            (
                key.to_string(),
                GroupMetrics {
                    summary,
                    investment_share_pct: share,
                },
            )
        })
        .collect()
}

/// Places records on the days of a calendar month by their key date.
///
/// Records without a key date, or whose key date falls outside the month,
/// are left out.
#[must_use]
pub fn events_in_month<R: Record + Clone>(
    records: &[R],
    month: CalendarMonth,
) -> BTreeMap<Date, Vec<R>> {
    let mut days: BTreeMap<Date, Vec<R>> = BTreeMap::new();
    for record in records {
        if let Some(date) = record.key_date().filter(|d| month.contains(*d)) {
            days.entry(date).or_default().push(record.clone());
        }
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Alert, AlertKind, DealKind, DealRecord};
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;

    fn jv(id: &str, partner: &str, company: &str, investment: Decimal) -> DealRecord {
        DealRecord::builder()
            .id(id)
            .kind(DealKind::JointVenture)
            .company_name(company)
            .partner_name(partner)
            .investment_amount(investment)
            .build()
            .unwrap()
    }

    fn alert(id: &str, due: Date) -> Alert {
        Alert {
            id: id.into(),
            kind: AlertKind::Renewal,
            title: "Renewal notice".into(),
            company_name: "Acme".into(),
            partner_name: "Aviva".into(),
            due_date: due,
            acknowledged: false,
        }
    }

    #[test]
    fn test_group_by_partner_sorted_and_ordered() {
        let deals = vec![
            jv("3", "Mediobanca", "C", dec!(10)),
            jv("1", "Aviva", "A", dec!(30)),
            jv("2", "Aviva", "B", dec!(60)),
        ];
        let grouping = group_by_partner(&deals);

        assert_eq!(grouping.keys().collect::<Vec<_>>(), ["Aviva", "Mediobanca"]);
        let aviva: Vec<&str> = grouping
            .get("Aviva")
            .unwrap()
            .iter()
            .map(|d| d.id.as_str())
            .collect();
        assert_eq!(aviva, ["1", "2"]);
        assert_eq!(grouping.record_count(), 3);
        assert!(grouping.get("Unknown").is_none());
    }

    #[test]
    fn test_keys_are_exact() {
        let deals = vec![jv("1", "Aviva", "A", dec!(1)), jv("2", "aviva", "A", dec!(1))];
        assert_eq!(group_by_partner(&deals).len(), 2);
        assert_eq!(group_by_company(&deals).len(), 1);
    }

    #[test]
    fn test_empty_grouping() {
        let deals: Vec<DealRecord> = vec![];
        let grouping = group_by_partner(&deals);
        assert!(grouping.is_empty());
        assert!(summarize_groups(&grouping).is_empty());
    }

    #[test]
    fn test_summarize_groups_shares() {
        let deals = vec![
            jv("1", "Aviva", "A", dec!(30)),
            jv("2", "Aviva", "B", dec!(45)),
            jv("3", "Mediobanca", "C", dec!(25)),
        ];
        let metrics = summarize_groups(&group_by_partner(&deals));

        let aviva = &metrics["Aviva"];
        assert_eq!(aviva.summary.count, 2);
        assert_eq!(aviva.summary.total_investment, dec!(75));
        assert_relative_eq!(aviva.investment_share_pct, 75.0);
        assert_relative_eq!(metrics["Mediobanca"].investment_share_pct, 25.0);
    }

    #[test]
    fn test_zero_investment_shares() {
        let deals = vec![jv("1", "Aviva", "A", dec!(0))];
        let metrics = summarize_groups(&group_by_partner(&deals));
        assert_eq!(metrics["Aviva"].investment_share_pct, 0.0);
    }

    #[test]
    fn test_events_in_month() {
        let d = |y, m, day| Date::from_ymd(y, m, day).unwrap();
        let alerts = vec![
            alert("a", d(2025, 1, 31)),
            alert("b", d(2025, 2, 1)),
            alert("c", d(2025, 2, 1)),
            alert("d", d(2025, 2, 28)),
            alert("e", d(2025, 3, 1)),
        ];
        let month = CalendarMonth::new(2025, 2).unwrap();
        let events = events_in_month(&alerts, month);

        assert_eq!(events.len(), 2);
        assert_eq!(events[&d(2025, 2, 1)].len(), 2);
        assert_eq!(events[&d(2025, 2, 28)][0].id, "d");
    }
}
