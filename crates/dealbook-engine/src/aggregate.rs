//! Reductions over a record slice.
//!
//! The same functions summarize a whole filtered set or a single group's
//! slice. Every reduction over an empty slice returns zero.

use crate::metrics::{moic, position_value};
use crate::record::Valued;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of records.
#[must_use]
pub fn count<R>(records: &[R]) -> usize {
    records.len()
}

/// Sum of a decimal field. Saturates instead of overflowing.
#[must_use]
pub fn sum_by<R, F>(records: &[R], field: F) -> Decimal
where
    F: Fn(&R) -> Decimal,
{
    records
        .iter()
        .map(field)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Arithmetic mean of a derived value. Zero for an empty slice.
#[must_use]
pub fn average_by<R, F>(records: &[R], value: F) -> f64
where
    F: Fn(&R) -> f64,
{
    if records.is_empty() {
        return 0.0;
    }
    let total: f64 = records.iter().map(value).sum();
    total / records.len() as f64
}

/// Summary totals for a slice of records.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregateSummary {
    /// Number of records.
    pub count: usize,

    /// Total capital invested.
    pub total_investment: Decimal,

    /// Total current value of our stakes.
    pub total_position_value: Decimal,

    /// Simple mean of per-record MOIC.
    pub average_moic: f64,

    /// MOIC weighted by capital invested.
    pub weighted_moic: f64,
}

impl AggregateSummary {
    /// Returns true if no records were summarized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Summarizes a slice of valued records.
#[must_use]
pub fn summarize<R: Valued>(records: &[R]) -> AggregateSummary {
    if records.is_empty() {
        return AggregateSummary::default();
    }

    let investment = |r: &R| r.investment_amount().unwrap_or(Decimal::ZERO).max(Decimal::ZERO);
    let total_investment = sum_by(records, investment);

    // Weighted MOIC: sum(moic * investment) / sum(investment)
    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;
    for r in records {
        let weight = investment(r).to_f64().unwrap_or(0.0);
        if weight > 0.0 {
            weighted_sum += moic(r) * weight;
            weight_total += weight;
        }
    }
    let weighted_moic = if weight_total > 0.0 {
        weighted_sum / weight_total
    } else {
        0.0
    };

    AggregateSummary {
        count: count(records),
        total_investment,
        total_position_value: sum_by(records, position_value::<R>),
        average_moic: average_by(records, moic::<R>),
        weighted_moic,
    }
}
