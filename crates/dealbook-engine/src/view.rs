//! Filtered, grouped and summarized views.
//!
//! [`build_view`] runs the whole pipeline (filter, group, derive metrics,
//! aggregate) in one call. The joint venture, studio, accelerator and
//! financing dashboards are all this one function over different record
//! slices.

use crate::aggregate::{summarize, AggregateSummary};
use crate::filter::{filter, FilterCriteria};
use crate::grouping::{group_by_partner, summarize_groups, GroupMetrics};
use crate::metrics::{derive_metrics, DerivedMetrics};
use crate::record::{Record, Valued};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A record with its derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewRow<R> {
    /// The record.
    pub record: R,
    /// Metrics derived from it.
    pub metrics: DerivedMetrics,
}

/// The result of [`build_view`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealView<R> {
    /// Matching records in input order.
    pub rows: Vec<ViewRow<R>>,
    /// Per-partner summaries of the matching records.
    pub by_partner: BTreeMap<String, GroupMetrics>,
    /// Totals over all matching records.
    pub totals: AggregateSummary,
}

impl<R> DealView<R> {
    /// Returns true if no record matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over the matching records.
    pub fn records(&self) -> impl Iterator<Item = &R> {
        self.rows.iter().map(|row| &row.record)
    }
}

/// Filters `records`, then derives per-row metrics, per-partner summaries
/// and totals over the matches.
#[must_use]
pub fn build_view<R>(records: &[R], criteria: &FilterCriteria) -> DealView<R>
where
    R: Record + Valued + Clone,
{
    let matched = filter(records, criteria);
    let by_partner = summarize_groups(&group_by_partner(&matched));
    let totals = summarize(&matched);
    let rows = matched
        .into_iter()
        .map(|record| ViewRow {
            metrics: derive_metrics(&record),
            record,
        })
        .collect();

    DealView {
        rows,
        by_partner,
        totals,
    }
}
